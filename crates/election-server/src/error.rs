//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce `{"error": ...}` bodies: a list of
//! problems for validation failures, the raw message for everything else.

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use election_storage::StorageError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required fields were missing on a write (400).
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// Invalid request or a failed store call on a single-row route (400).
    #[error("{0}")]
    BadRequest(String),

    /// Failed store call on a listing route (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a store failure to a 500, for routes whose failures are not the
    /// caller's fault.
    pub fn internal(err: StorageError) -> Self {
        tracing::warn!(error = %err, "store query failed");
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(problems) => {
                (StatusCode::BAD_REQUEST, json!({ "error": problems }))
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        tracing::warn!(error = %err, "store query failed");
        ApiError::BadRequest(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
