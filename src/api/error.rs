use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::harness::HarnessError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced to HTTP clients as a status code and a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedJson(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }
        (status, self.to_string()).into_response()
    }
}

impl From<HarnessError> for ApiError {
    fn from(err: HarnessError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("performance task failed: {err}"))
    }
}
