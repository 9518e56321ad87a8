//! Mapping from engine failures to HTTP responses

use crate::types::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use blink_lib::TransferError;
use thiserror::Error;
use tracing::{error, warn};

/// Errors surfaced by action handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Transfer(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Transfer(e) if e.is_retryable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Transfer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

/// Helper function to create error responses
pub fn create_error_response(
    status: StatusCode,
    message: String,
) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { message }))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = match &self {
            ApiError::Transfer(e) => Some(e.kind()),
            _ => None,
        };
        if status.is_server_error() {
            error!(error = ?self, ?kind, %status, "Transfer request failed");
        } else {
            warn!(error = %self, ?kind, %status, "Rejected transfer request");
        }
        create_error_response(status, self.to_string()).into_response()
    }
}
