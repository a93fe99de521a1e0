use axum::routing::get;
use axum::Router;

use crate::handlers::rating;
use crate::state::AppState;

/// Routes mounted at `/ratings`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(rating::list))
}
