//! Handlers for `/reviews` and `/movies/{id}/reviews`.
//!
//! Reviews are always read and written together with their rating.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::types::DbId;
use reel_db::models::review::{CreateReview, Review, ReviewView, UpdateReview};
use reel_db::repositories::{MovieRepo, ReviewRepo};

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::response::MessageResponse;
use crate::state::AppState;

async fn ensure_movie_exists(state: &AppState, movie_id: DbId) -> AppResult<()> {
    if MovieRepo::exists(&state.pool, movie_id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found("Movie", movie_id).into())
    }
}

/// POST /api/movies/{id}/reviews
pub async fn create(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateReview>,
) -> AppResult<(StatusCode, Json<ReviewView>)> {
    ensure_movie_exists(&state, movie_id).await?;

    let view = ReviewRepo::create(&state.pool, movie_id, &input).await?;
    tracing::info!(review_id = view.id, movie_id, "Review created");
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/movies/{id}/reviews
pub async fn list_by_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<ReviewView>>> {
    ensure_movie_exists(&state, movie_id).await?;

    let reviews = ReviewRepo::list_views_by_movie(&state.pool, movie_id).await?;
    Ok(Json(reviews))
}

/// PATCH or PUT /api/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateReview>,
) -> AppResult<Json<ReviewView>> {
    let view = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Review", id))?;
    Ok(Json(view))
}

/// DELETE /api/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ReviewRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Review", id).into());
    }
    tracing::info!(review_id = id, "Review and rating deleted");
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}

/// GET /api/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(reviews))
}
