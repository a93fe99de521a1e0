//! Demo data for local development.
//!
//! Wipes all four tables and loads two directors, each with one movie and
//! one rated review.

use reel_core::types::{DbId, RatingValue};
use sqlx::PgPool;

struct SeedEntry {
    director: &'static str,
    age: i32,
    gender: &'static str,
    title: &'static str,
    rating: RatingValue,
    review: &'static str,
}

const ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        director: "Christopher Nolan",
        age: 52,
        gender: "Male",
        title: "Inception",
        rating: 5,
        review: "A masterpiece of modern cinema",
    },
    SeedEntry {
        director: "Martin Scorsese",
        age: 81,
        gender: "Male",
        title: "The Departed",
        rating: 5,
        review: "Brilliant performances all around",
    },
];

/// Row counts written by [`seed_demo_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub directors: usize,
    pub movies: usize,
    pub reviews: usize,
}

/// Replace the database contents with the demo data set.
///
/// Runs in one transaction: either the full data set is loaded or the
/// previous contents are left untouched.
pub async fn seed_demo_data(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE reviews, rating, movies, directors RESTART IDENTITY")
        .execute(&mut *tx)
        .await?;

    for entry in ENTRIES {
        let director_id: DbId = sqlx::query_scalar(
            "INSERT INTO directors (name, age, gender) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(entry.director)
        .bind(entry.age)
        .bind(entry.gender)
        .fetch_one(&mut *tx)
        .await?;

        let movie_id: DbId =
            sqlx::query_scalar("INSERT INTO movies (title, director_id) VALUES ($1, $2) RETURNING id")
                .bind(entry.title)
                .bind(director_id)
                .fetch_one(&mut *tx)
                .await?;

        let rating_id: DbId =
            sqlx::query_scalar("INSERT INTO rating (movie_id, rating) VALUES ($1, $2) RETURNING id")
                .bind(movie_id)
                .bind(entry.rating)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query("INSERT INTO reviews (movie_id, rating_id, review) VALUES ($1, $2, $3)")
            .bind(movie_id)
            .bind(rating_id)
            .bind(entry.review)
            .execute(&mut *tx)
            .await?;

        tracing::debug!(director = entry.director, movie = entry.title, "Seeded entry");
    }

    tx.commit().await?;

    Ok(SeedSummary {
        directors: ENTRIES.len(),
        movies: ENTRIES.len(),
        reviews: ENTRIES.len(),
    })
}
