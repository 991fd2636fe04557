use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::Envelope;

#[derive(Debug)]
pub enum AppError {
    Upload(String),
    Validation(String),
    Unauthorized(String),
    Forbidden(String),
    /// Missing row on the read path. Reported as 400, not 404.
    NotFound(String),
    Conflict(String),
    Database(sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::NotFound(_) | AppError::Database(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload failed: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation failed: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Upload(msg) => {
                tracing::warn!("Image upload failed: {msg}");
                msg
            }
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg,
            // Driver messages are passed through to the caller.
            AppError::Database(err) => err.to_string(),
        };

        (status, axum::Json(Envelope::error(status, message))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
