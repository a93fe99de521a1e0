use axum::extract::State;
use axum::Json;
use reel_db::models::rating::Rating;
use reel_db::repositories::RatingRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/ratings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Rating>>> {
    let ratings = RatingRepo::list(&state.pool).await?;
    Ok(Json(ratings))
}
