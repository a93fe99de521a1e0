//! Repository for the `rating` table.

use reel_core::types::{DbId, RatingValue};
use sqlx::PgPool;

use crate::models::rating::Rating;

const COLUMNS: &str = "id, movie_id, rating";

pub struct RatingRepo;

impl RatingRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rating WHERE id = $1");
        sqlx::query_as::<_, Rating>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rating ORDER BY id");
        sqlx::query_as::<_, Rating>(&query).fetch_all(pool).await
    }

    /// Insert a rating inside the caller's transaction.
    pub(crate) async fn insert_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
        value: RatingValue,
    ) -> Result<Rating, sqlx::Error> {
        let query = format!(
            "INSERT INTO rating (movie_id, rating) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(movie_id)
            .bind(value)
            .fetch_one(&mut **tx)
            .await
    }

    /// Overwrite a rating value inside the caller's transaction.
    pub(crate) async fn set_value_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        value: RatingValue,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE rating SET rating = $2 WHERE id = $1")
            .bind(id)
            .bind(value)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    pub(crate) async fn delete_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM rating WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
