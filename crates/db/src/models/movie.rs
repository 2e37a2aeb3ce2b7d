//! Movie entity model and DTOs.

use chrono::NaiveDate;
use reelboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDate,
    pub box_office_sales: Option<f64>,
}

/// DTO for creating a new movie. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDate,
    pub box_office_sales: Option<f64>,
}

/// DTO for updating an existing movie. All mutable fields are replaced,
/// so every field is required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: String,
    pub genre: String,
    pub release_date: NaiveDate,
    pub box_office_sales: Option<f64>,
}

impl UpdateMovie {
    /// The full row state this update produces for the given id.
    ///
    /// Update statements report rows affected rather than returning the
    /// row, so notification payloads are assembled from the input.
    pub fn into_movie(self, id: DbId) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            release_date: self.release_date,
            box_office_sales: self.box_office_sales,
        }
    }
}
