use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booth_core::StoreError;
use serde_json::json;

/// API error type. Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// A request body the JSON extractor refused, with the status it chose
    /// (400 for bad syntax, 413 for an oversized body, 415 for a missing
    /// `Content-Type: application/json`).
    #[error("{message}")]
    Rejection { status: StatusCode, message: String },

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejection {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Rejection { status, message } => (*status, message.clone()),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Store(err) => match err {
                StoreError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                StoreError::InvalidPatch(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                StoreError::StorageUnavailable { .. } => {
                    tracing::error!("Storage error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage unavailable".to_string(),
                    )
                }
                StoreError::Encode(..) => {
                    tracing::error!("Encoding error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
