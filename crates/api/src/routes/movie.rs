//! Route definitions for the `/movies` resource.
//!
//! Also nests the per-movie review routes under `/movies/{id}/reviews`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{movie, review};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// PATCH  /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/reviews     -> review::list_by_movie
/// POST   /{id}/reviews     -> review::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/{id}", patch(movie::update).delete(movie::delete))
        .route(
            "/{id}/reviews",
            get(review::list_by_movie).post(review::create),
        )
}
