// rest_api/src/error.rs

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use models::errors::{StoreError, ValidationError};

/// The REST API error enum. Every failure a handler can hit maps to one
/// of these, and from there to a status code and an `{"error": ...}`
/// body.
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for RestApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(v) => RestApiError::Validation(v),
            StoreError::NotFound(key) => {
                RestApiError::NotFound(format!("record {} was not found", key))
            }
            other => RestApiError::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            RestApiError::Validation(_) => StatusCode::BAD_REQUEST,
            RestApiError::NotFound(_) => StatusCode::NOT_FOUND,
            RestApiError::Conflict(_) => StatusCode::CONFLICT,
            RestApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
