use reel_core::types::{DbId, RatingValue};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rating` table. Ratings are only written as half of a
/// review, so there are no standalone DTOs.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub movie_id: DbId,
    pub rating: RatingValue,
}
