use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by handlers. Each variant fixes both the status code
/// and the body shape the endpoint contract promises.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 `{"description": ...}`
    #[error("{0}")]
    NotFound(String),
    /// 400 `{"errors": [...]}`
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
    /// 400 `{"error": ...}`
    #[error("{0}")]
    BadRequest(String),
    /// 500 `{"error": ...}`
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(e: ServiceError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({"description": msg}))).into_response(),
            ApiError::Invalid(errors) => (StatusCode::BAD_REQUEST, Json(json!({"errors": errors}))).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(json!({"error": msg}))).into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": msg}))).into_response()
            }
        }
    }
}
