//! Handlers for the `/directors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::types::DbId;
use reel_db::models::director::{CreateDirector, Director, UpdateDirector};
use reel_db::repositories::DirectorRepo;

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/directors
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDirector>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Director created successfully",
            id: director.id,
        }),
    ))
}

/// GET /api/directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// PATCH /api/directors/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDirector>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Director", id))?;
    Ok(Json(director))
}

/// DELETE /api/directors/{id}
///
/// A director that still has movies is refused by the foreign key and
/// reported as a bad request.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !DirectorRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Director", id).into());
    }
    tracing::info!(director_id = id, "Director deleted");
    Ok(Json(MessageResponse::new("Director deleted successfully")))
}
