//! Error types for the course search API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Machine-readable error code carried in every error body.
fn status_to_error_code(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "INVALID_PARAMS",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        StatusCode::SERVICE_UNAVAILABLE => "DATABASE_ERROR",
        _ => "INTERNAL_ERROR",
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Client-facing bodies carry the bare message, without the Display
        // prefixes used in logs.
        let (status, error_message, details) = match self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            Error::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            Error::Database(source) => {
                // Store failures are reported immediately, never retried. The
                // driver message is preserved in `details`; everything else
                // stays in the server logs.
                tracing::error!(error = %source, "Database error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database operation failed".to_string(),
                    Some(source.to_string()),
                )
            }
            Error::Internal(ref message) => {
                tracing::error!("Internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            Error::Other(ref source) => {
                tracing::error!("Internal error: {source:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": error_message,
            "code": status_to_error_code(status),
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, Json(body)).into_response()
    }
}
