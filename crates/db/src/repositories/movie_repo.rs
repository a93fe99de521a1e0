//! Repository for the `movies` table.

use reel_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{
    CreateMovie, Movie, MovieDetail, MovieSummary, MovieWithDirector, UpdateMovie,
};

const COLUMNS: &str = "id, title, director_id";

/// Provides CRUD operations for movies, plus the director-joined read views.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// Callers check the director first; the foreign key still rejects a
    /// director deleted in between.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, director_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a movie with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie together with its director's name.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<MovieDetail>, sqlx::Error> {
        sqlx::query_as::<_, MovieDetail>(
            "SELECT m.id, m.title, m.director_id, d.name AS director
             FROM movies m
             JOIN directors d ON d.id = m.director_id
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List every movie with its director's name resolved.
    pub async fn list_with_director(pool: &PgPool) -> Result<Vec<MovieWithDirector>, sqlx::Error> {
        sqlx::query_as::<_, MovieWithDirector>(
            "SELECT m.id, m.title, d.name AS director
             FROM movies m
             JOIN directors d ON d.id = m.director_id
             ORDER BY m.id",
        )
        .fetch_all(pool)
        .await
    }

    /// List the movies of one director. Unknown directors yield an empty list.
    pub async fn list_by_director(
        pool: &PgPool,
        director_id: DbId,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        sqlx::query_as::<_, MovieSummary>(
            "SELECT id, title FROM movies WHERE director_id = $1 ORDER BY id",
        )
        .bind(director_id)
        .fetch_all(pool)
        .await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                director_id = COALESCE($3, director_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.director_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while reviews or ratings remain.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
