//! Movie catalog field constraints and validators.
//!
//! All writes run these checks before any SQL is issued, so a rejected
//! input never reaches the database. The storage layer backs them with
//! NOT NULL and CHECK constraints.

use crate::error::CoreError;

/// Maximum length of a movie title.
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum length of a genre name.
pub const MAX_GENRE_LEN: usize = 50;

/// Validate that a title is non-empty and within the length cap.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that a genre is non-empty and within the length cap.
pub fn validate_genre(genre: &str) -> Result<(), CoreError> {
    if genre.trim().is_empty() {
        return Err(CoreError::Validation("Genre is required".into()));
    }
    if genre.chars().count() > MAX_GENRE_LEN {
        return Err(CoreError::Validation(format!(
            "Genre cannot exceed {MAX_GENRE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate that box office sales, if present, is a non-negative number.
pub fn validate_box_office_sales(sales: Option<f64>) -> Result<(), CoreError> {
    match sales {
        Some(v) if !v.is_finite() => Err(CoreError::Validation(
            "Box office sales must be a finite number".into(),
        )),
        Some(v) if v < 0.0 => Err(CoreError::Validation(
            "Box office sales must be positive".into(),
        )),
        _ => Ok(()),
    }
}
