//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::validation::{ValidationError, ValidationResult};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Command rejected")]
    CommandRejected(ValidationResult),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, errors) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, 10001, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, 10002, msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, 10005, msg, None),
            AppError::CommandRejected(result) => (
                StatusCode::BAD_REQUEST,
                10007,
                "Validation failed".into(),
                Some(result.into_errors()),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    10000,
                    "Internal server error".into(),
                    None,
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    10000,
                    "Internal server error".into(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            code,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
