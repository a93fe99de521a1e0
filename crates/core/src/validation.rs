//! Input checks shared by every create/update DTO.
//!
//! DTOs derive [`validator::Validate`] with the column limits below; handlers
//! call [`validate_input`] so a violation surfaces as
//! [`CoreError::Validation`] instead of a database error.

use validator::Validate;

use crate::error::CoreError;

/// `directors.name` and `movies.title` are `VARCHAR(100)`.
pub const MAX_NAME_LEN: u64 = 100;

/// `directors.gender` is `VARCHAR(50)`.
pub const MAX_GENDER_LEN: u64 = 50;

/// `reviews.review` is `VARCHAR(500)`.
pub const MAX_REVIEW_LEN: u64 = 500;

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
