use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /                 -> list
/// PATCH  /{id}             -> update
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(review::list)).route(
        "/{id}",
        patch(review::update)
            .put(review::update)
            .delete(review::delete),
    )
}
