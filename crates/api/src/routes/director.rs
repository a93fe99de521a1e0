//! Route definitions for the `/directors` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{director, movie};
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// PATCH  /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/movies      -> movie::list_by_director
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(director::list).post(director::create))
        .route("/{id}", patch(director::update).delete(director::delete))
        .route("/{id}/movies", get(movie::list_by_director))
}
