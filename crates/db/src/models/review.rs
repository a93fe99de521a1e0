//! Review entity model, the combined review/rating view, and DTOs.

use reel_core::types::{DbId, RatingValue};
use reel_core::validation::MAX_REVIEW_LEN;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub movie_id: DbId,
    pub rating_id: DbId,
    pub review: Option<String>,
}

/// A review joined with its rating value and the reviewed movie's title.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReviewView {
    pub id: DbId,
    pub review: Option<String>,
    pub rating: RatingValue,
    pub movie_title: String,
}

/// DTO for posting a review. Creates the paired rating as well.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    pub rating: RatingValue,
    #[validate(length(max = MAX_REVIEW_LEN))]
    pub review: Option<String>,
}

/// DTO for updating a review's text and/or its rating value.
///
/// An explicit `"review": null` clears the text.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReview {
    #[serde(default, deserialize_with = "super::double_option")]
    #[validate(length(max = MAX_REVIEW_LEN))]
    pub review: Option<Option<String>>,
    pub rating: Option<RatingValue>,
}
