pub mod director;
pub mod health;
pub mod home;
pub mod movie;
pub mod rating;
pub mod review;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /directors                      list, create
/// /directors/{id}                 update (PATCH), delete
/// /directors/{id}/movies          list movies of a director
///
/// /movies                         list (with director name), create
/// /movies/{id}                    update (PATCH), delete
/// /movies/{id}/reviews            list, create (review + rating)
///
/// /reviews                        list all
/// /reviews/{id}                   update (PATCH or PUT), delete
///
/// /ratings                        list all
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/directors", director::router())
        .nest("/movies", movie::router())
        .nest("/reviews", review::router())
        .nest("/ratings", rating::router())
}
