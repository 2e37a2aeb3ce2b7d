//! Repository for the `movies` table.

use reelboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_date, box_office_sales";

/// Provides CRUD operations for movies.
///
/// All statements are parameterized; no SQL is built from user input.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its fresh id.
    pub async fn insert(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, release_date, box_office_sales)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_date)
            .bind(input.box_office_sales)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies, ordered by title ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title ASC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of the movie with the given id.
    ///
    /// Returns the number of rows affected. The caller distinguishes
    /// 0 (id not found) from 1 (replaced); anything above 1 means the id
    /// uniqueness invariant is broken.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies
             SET title = $2,
                 genre = $3,
                 release_date = $4,
                 box_office_sales = $5
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.genre)
        .bind(input.release_date)
        .bind(input.box_office_sales)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete the movie with the given id. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
