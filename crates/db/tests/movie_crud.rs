//! Integration tests for the movie repository.
//!
//! Exercises the repository layer against a real database:
//! - Insert returns the row with a fresh id
//! - Lookup by id, present and absent
//! - Listing is ordered by title regardless of insertion order
//! - Update and delete report rows affected
//! - Storage-layer constraints back the pre-write validation

use chrono::NaiveDate;
use reelboard_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use reelboard_db::repositories::MovieRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(title: &str, genre: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        genre: genre.to_string(),
        release_date: NaiveDate::from_ymd_opt(2021, 10, 22).unwrap(),
        box_office_sales: None,
    }
}

fn dune() -> CreateMovie {
    CreateMovie {
        title: "Dune".to_string(),
        genre: "Sci-Fi".to_string(),
        release_date: NaiveDate::from_ymd_opt(2021, 10, 22).unwrap(),
        box_office_sales: Some(402.5),
    }
}

// ---------------------------------------------------------------------------
// Test: insert and fetch round-trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_insert_assigns_id_and_returns_row(pool: PgPool) {
    let movie = MovieRepo::insert(&pool, &dune()).await.unwrap();

    assert!(movie.id >= 1);
    assert_eq!(movie.title, "Dune");
    assert_eq!(movie.genre, "Sci-Fi");
    assert_eq!(
        movie.release_date,
        NaiveDate::from_ymd_opt(2021, 10, 22).unwrap()
    );
    assert_eq!(movie.box_office_sales, Some(402.5));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_returns_inserted_row(pool: PgPool) {
    let created = MovieRepo::insert(&pool, &dune()).await.unwrap();

    let found = MovieRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("inserted movie should be found");

    assert_eq!(found, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_missing_returns_none(pool: PgPool) {
    let found = MovieRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Test: listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_empty_table(pool: PgPool) {
    let movies = MovieRepo::list_all(&pool).await.unwrap();
    assert!(movies.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_all_sorted_by_title(pool: PgPool) {
    // Inserted out of order on purpose.
    for title in ["Zodiac", "Alien", "Memento"] {
        MovieRepo::insert(&pool, &new_movie(title, "Thriller"))
            .await
            .unwrap();
    }

    let movies = MovieRepo::list_all(&pool).await.unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();

    assert_eq!(titles, vec!["Alien", "Memento", "Zodiac"]);
}

// ---------------------------------------------------------------------------
// Test: update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_all_fields(pool: PgPool) {
    let created = MovieRepo::insert(&pool, &dune()).await.unwrap();

    let input = UpdateMovie {
        title: "Dune: Part One".to_string(),
        genre: "Science Fiction".to_string(),
        release_date: NaiveDate::from_ymd_opt(2021, 10, 21).unwrap(),
        box_office_sales: Some(434.8),
    };
    let rows = MovieRepo::update(&pool, created.id, &input).await.unwrap();
    assert_eq!(rows, 1);

    let found = MovieRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        found,
        Movie {
            id: created.id,
            title: "Dune: Part One".to_string(),
            genre: "Science Fiction".to_string(),
            release_date: NaiveDate::from_ymd_opt(2021, 10, 21).unwrap(),
            box_office_sales: Some(434.8),
        }
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_id_affects_zero_rows(pool: PgPool) {
    let input = UpdateMovie {
        title: "Nothing".to_string(),
        genre: "Drama".to_string(),
        release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        box_office_sales: None,
    };
    let rows = MovieRepo::update(&pool, 999_999, &input).await.unwrap();
    assert_eq!(rows, 0);
}

// ---------------------------------------------------------------------------
// Test: delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let created = MovieRepo::insert(&pool, &dune()).await.unwrap();

    let rows = MovieRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(rows, 1);

    let found = MovieRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_id_affects_zero_rows(pool: PgPool) {
    let rows = MovieRepo::delete(&pool, 999_999).await.unwrap();
    assert_eq!(rows, 0);
}

// ---------------------------------------------------------------------------
// Test: storage-layer constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_box_office_rejected_by_check_constraint(pool: PgPool) {
    let mut input = dune();
    input.box_office_sales = Some(-1.0);

    let result = MovieRepo::insert(&pool, &input).await;
    assert!(result.is_err(), "CHECK constraint should reject negatives");
}
