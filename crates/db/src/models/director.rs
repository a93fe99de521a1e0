//! Director entity model and DTOs.

use reel_core::types::DbId;
use reel_core::validation::{MAX_GENDER_LEN, MAX_NAME_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `directors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// DTO for creating a director. Only `name` is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDirector {
    #[validate(length(max = MAX_NAME_LEN))]
    pub name: String,
    pub age: Option<i32>,
    #[validate(length(max = MAX_GENDER_LEN))]
    pub gender: Option<String>,
}

/// DTO for a partial director update. Absent fields keep their stored value;
/// an explicit `null` clears `age` or `gender`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDirector {
    #[validate(length(max = MAX_NAME_LEN))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub age: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[validate(length(max = MAX_GENDER_LEN))]
    pub gender: Option<Option<String>>,
}
