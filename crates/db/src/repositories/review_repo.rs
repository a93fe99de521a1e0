//! Repository for the `reviews` table.
//!
//! A review and its rating are one logical record and are always written
//! together inside a single transaction.

use reel_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewView, UpdateReview};
use crate::repositories::RatingRepo;

const COLUMNS: &str = "id, movie_id, rating_id, review";

/// Select list for [`ReviewView`]; the `FROM` clause is [`VIEW_FROM`].
const VIEW_COLUMNS: &str = "r.id, r.review, rt.rating, m.title AS movie_title";

const VIEW_FROM: &str = "reviews r
     JOIN rating rt ON rt.id = r.rating_id
     JOIN movies m ON m.id = r.movie_id";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Create a rating and the review that references it.
    ///
    /// Both rows are written in one transaction, so a failure on the review
    /// insert leaves no orphan rating behind.
    pub async fn create(
        pool: &PgPool,
        movie_id: DbId,
        input: &CreateReview,
    ) -> Result<ReviewView, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rating = RatingRepo::insert_in_tx(&mut tx, movie_id, input.rating).await?;

        let review_id: DbId = sqlx::query_scalar(
            "INSERT INTO reviews (movie_id, rating_id, review)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(movie_id)
        .bind(rating.id)
        .bind(&input.review)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("SELECT {VIEW_COLUMNS} FROM {VIEW_FROM} WHERE r.id = $1");
        let view = sqlx::query_as::<_, ReviewView>(&query)
            .bind(review_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(view)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every review row, unjoined.
    pub async fn list(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY id");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// List the reviews of one movie with rating value and movie title.
    pub async fn list_views_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<ReviewView>, sqlx::Error> {
        let query =
            format!("SELECT {VIEW_COLUMNS} FROM {VIEW_FROM} WHERE r.movie_id = $1 ORDER BY r.id");
        sqlx::query_as::<_, ReviewView>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Update the review text and/or the paired rating value in place.
    ///
    /// An explicit `null` review clears the text; an absent one keeps it.
    /// Returns `None` if no review with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<ReviewView>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rating_id: Option<DbId> = sqlx::query_scalar(
            "UPDATE reviews SET review = CASE WHEN $2 THEN $3 ELSE review END
             WHERE id = $1
             RETURNING rating_id",
        )
        .bind(id)
        .bind(input.review.is_some())
        .bind(input.review.as_ref().and_then(|r| r.as_deref()))
        .fetch_optional(&mut *tx)
        .await?;

        let Some(rating_id) = rating_id else {
            return Ok(None);
        };

        if let Some(value) = input.rating {
            RatingRepo::set_value_in_tx(&mut tx, rating_id, value).await?;
        }

        let query = format!("SELECT {VIEW_COLUMNS} FROM {VIEW_FROM} WHERE r.id = $1");
        let view = sqlx::query_as::<_, ReviewView>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(view))
    }

    /// Delete a review and its rating. Returns `true` if the review existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rating_id: Option<DbId> =
            sqlx::query_scalar("DELETE FROM reviews WHERE id = $1 RETURNING rating_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(rating_id) = rating_id else {
            return Ok(false);
        };

        // Review first: it holds the foreign key to the rating.
        RatingRepo::delete_in_tx(&mut tx, rating_id).await?;

        tx.commit().await?;
        Ok(true)
    }
}
