//! Movie entity model, joined views and DTOs.

use reel_core::types::DbId;
use reel_core::validation::MAX_NAME_LEN;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
}

/// Movie listing entry with the director name resolved.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieWithDirector {
    pub id: DbId,
    pub title: String,
    pub director: String,
}

/// Movie listing entry scoped to a single director.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
}

/// Full movie view returned after an update: the foreign key and the
/// resolved director name.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub director_id: DbId,
    pub director: String,
}

/// DTO for creating a movie. The director must already exist.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(max = MAX_NAME_LEN))]
    pub title: String,
    pub director_id: DbId,
}

/// DTO for a partial movie update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(max = MAX_NAME_LEN))]
    pub title: Option<String>,
    pub director_id: Option<DbId>,
}
