use axum::Json;

use crate::error::AppError;
use crate::response::MessageResponse;

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to Movie-App API"))
}

/// Fallback for any path no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("no route matches the request path".into())
}
