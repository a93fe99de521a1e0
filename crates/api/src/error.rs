use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant collapses to one of three flat bodies:
/// `{"error": "Not found"}`, `{"error": "Bad request"}` or
/// `{"error": "Internal server error"}`. The detail only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A route or path parameter that does not resolve to anything.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A malformed or incomplete request body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Coarse error kinds exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    ServerError,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Not found",
            ErrorKind::BadRequest => "Bad request",
            ErrorKind::ServerError => "Internal server error",
        }
    }
}

impl AppError {
    /// Classify this error into the kind reported to the client.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Core(CoreError::NotFound { .. }) | AppError::NotFound(_) => {
                ErrorKind::NotFound
            }
            AppError::Core(CoreError::Validation(_)) | AppError::BadRequest(_) => {
                ErrorKind::BadRequest
            }
            AppError::InternalError(_) => ErrorKind::ServerError,
            AppError::Database(err) => classify_sqlx_error(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        match kind {
            ErrorKind::ServerError => tracing::error!(error = %self, "Request failed"),
            _ => tracing::debug!(error = %self, "Request rejected"),
        }

        let body = json!({ "error": kind.message() });
        (kind.status(), axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error.
///
/// - `RowNotFound` maps to not found.
/// - Constraint and data errors the client can correct (foreign-key,
///   not-null, unique, string too long, invalid text representation) map
///   to bad request.
/// - Everything else is a server error.
fn classify_sqlx_error(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503" | "23502" | "23505" | "22001" | "22P02") => ErrorKind::BadRequest,
            _ => ErrorKind::ServerError,
        },
        _ => ErrorKind::ServerError,
    }
}
