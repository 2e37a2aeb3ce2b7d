//! The movie store: validation, persistence, and change notification.
//!
//! [`MovieStore`] is the single owner of durable movie state. Every
//! mutating operation validates its input before any write, executes one
//! parameterized statement through [`MovieRepo`], and on success announces
//! the change through the injected [`ChangeNotifier`]. Failed and no-op
//! calls announce nothing.

use std::sync::Arc;

use reelboard_core::catalog;
use reelboard_core::error::CoreError;
use reelboard_core::types::DbId;
use reelboard_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use reelboard_db::repositories::MovieRepo;
use reelboard_db::DbPool;
use reelboard_events::{ChangeNotifier, MovieEvent};

use crate::error::AppResult;

/// Validation, CRUD, and fan-out for the movie catalog.
///
/// Holds the pool and an abstract notifier, so the live transport can be
/// swapped (or stubbed in tests) without touching storage logic.
pub struct MovieStore {
    pool: DbPool,
    notifier: Arc<dyn ChangeNotifier>,
}

impl MovieStore {
    pub fn new(pool: DbPool, notifier: Arc<dyn ChangeNotifier>) -> Self {
        Self { pool, notifier }
    }

    /// List all movies, sorted by title ascending.
    pub async fn list_all(&self) -> AppResult<Vec<Movie>> {
        Ok(MovieRepo::list_all(&self.pool).await?)
    }

    /// Fetch a single movie. `None` is the not-found signal.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<Movie>> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    /// Create a movie. Validation runs before any write; on success the
    /// fully-populated row (fresh id included) is returned and broadcast.
    pub async fn create(&self, input: CreateMovie) -> AppResult<Movie> {
        validate_fields(&input.title, &input.genre, input.box_office_sales)?;

        let movie = MovieRepo::insert(&self.pool, &input).await?;
        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

        self.notifier.movie_changed(MovieEvent::MovieCreated {
            movie: movie.clone(),
        });
        Ok(movie)
    }

    /// Replace all mutable fields of an existing movie.
    ///
    /// Returns the new row state if exactly one row was affected (and
    /// broadcasts it), or `None` if the id does not exist. More than one
    /// affected row means the id uniqueness invariant is broken and is
    /// reported as a fatal consistency error.
    pub async fn update(&self, id: DbId, input: UpdateMovie) -> AppResult<Option<Movie>> {
        validate_fields(&input.title, &input.genre, input.box_office_sales)?;

        match MovieRepo::update(&self.pool, id, &input).await? {
            0 => Ok(None),
            1 => {
                let movie = input.into_movie(id);
                tracing::info!(movie_id = id, "Movie updated");
                self.notifier.movie_changed(MovieEvent::MovieUpdated {
                    movie: movie.clone(),
                });
                Ok(Some(movie))
            }
            n => Err(CoreError::Consistency(format!(
                "update of movie {id} affected {n} rows"
            ))
            .into()),
        }
    }

    /// Delete a movie. Returns `true` (and broadcasts the deleted id) if
    /// exactly one row was removed, `false` if the id does not exist.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        match MovieRepo::delete(&self.pool, id).await? {
            0 => Ok(false),
            1 => {
                tracing::info!(movie_id = id, "Movie deleted");
                self.notifier.movie_changed(MovieEvent::MovieDeleted { id });
                Ok(true)
            }
            n => Err(CoreError::Consistency(format!(
                "delete of movie {id} affected {n} rows"
            ))
            .into()),
        }
    }
}

/// Run all field constraints, reporting the first failure.
fn validate_fields(
    title: &str,
    genre: &str,
    box_office_sales: Option<f64>,
) -> Result<(), CoreError> {
    catalog::validate_title(title)?;
    catalog::validate_genre(genre)?;
    catalog::validate_box_office_sales(box_office_sales)?;
    Ok(())
}
