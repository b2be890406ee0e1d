// src/error.rs
// Maps model errors onto JSON error responses

use accretion::AccretionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error returned by every handler.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: &'static str,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        error!("{}", message);
        Self {
            message,
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            error_code: "INTERNAL_ERROR",
        }
    }
}

impl From<AccretionError> for ApiError {
    fn from(err: AccretionError) -> Self {
        let (status_code, error_code) = match err {
            AccretionError::UninitializedState => (StatusCode::CONFLICT, "UNINITIALIZED_STATE"),
            AccretionError::InvalidParameter { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PARAMETER")
            }
            AccretionError::ReconstructionFailure(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "RECONSTRUCTION_FAILURE")
            }
        };

        Self {
            message: err.to_string(),
            status_code,
            error_code,
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("model task failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16(),
            "error_code": self.error_code,
        });

        (self.status_code, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
