//! API error handling
//!
//! Every failure is rendered as HTTP 500 with a flat `{success, error}` body.
//! The wire contract makes no distinction between a missing case, a rejected
//! submission, and an infrastructure failure; clients only see the error's
//! message text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_efiling::EfilingError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Filing run failed
    #[error(transparent)]
    Filing(#[from] EfilingError),

    /// Request body could not be deserialized
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Flat error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Filing(e) => e.to_string(),
            ApiError::BadRequest(msg) => msg,
        };

        error!(error = %message, "E-filing request failed");

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
