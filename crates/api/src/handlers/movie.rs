//! Handlers for the `/movies` resource and `/directors/{id}/movies`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::types::DbId;
use reel_db::models::movie::{
    CreateMovie, MovieDetail, MovieSummary, MovieWithDirector, UpdateMovie,
};
use reel_db::repositories::{DirectorRepo, MovieRepo};

use crate::error::AppResult;
use crate::extract::{ApiPath, ValidatedJson};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// Fail with 404 unless the director exists.
async fn ensure_director_exists(state: &AppState, director_id: DbId) -> AppResult<()> {
    if DirectorRepo::exists(&state.pool, director_id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found("Director", director_id).into())
    }
}

/// POST /api/movies
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    ensure_director_exists(&state, input.director_id).await?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, director_id = movie.director_id, "Movie created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Movie created successfully",
            id: movie.id,
        }),
    ))
}

/// GET /api/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieWithDirector>>> {
    let movies = MovieRepo::list_with_director(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /api/directors/{id}/movies
///
/// Always 200: an unknown director simply has no movies.
pub async fn list_by_director(
    State(state): State<AppState>,
    ApiPath(director_id): ApiPath<DbId>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    let movies = MovieRepo::list_by_director(&state.pool, director_id).await?;
    Ok(Json(movies))
}

/// PATCH /api/movies/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> AppResult<Json<MovieDetail>> {
    if let Some(director_id) = input.director_id {
        ensure_director_exists(&state, director_id).await?;
    }

    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::not_found("Movie", id))?;

    let detail = MovieRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Movie", id))?;
    Ok(Json(detail))
}

/// DELETE /api/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Movie", id).into());
    }
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}
