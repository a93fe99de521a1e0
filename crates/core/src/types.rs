/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Numeric score attached to a review.
pub type RatingValue = i32;
