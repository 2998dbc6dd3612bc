//! Response types and error handling for API endpoints
//!
//! Every failure is answered with the JSON error body the poller understands:
//! `{ error, details, code, ... }`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use presence_core::{ErrorBody, StatusError};
use thiserror::Error;
use tracing::{error, warn};

/// Value of the `Cache-Control` header on every proxy response
pub const NO_STORE: &str = "no-store";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Status(#[from] StatusError),

    #[error("No route for {0}")]
    NotFound(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status(e) => {
                StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Status(e) => e.code(),
            Self::NotFound(_) => "NOT_FOUND",
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::Status(e) => ErrorBody::from(e),
            Self::NotFound(path) => ErrorBody {
                error: Some("Not found".to_string()),
                details: Some(format!("No route for {path}")),
                code: Some(self.error_code().to_string()),
                ..ErrorBody::default()
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = %self, code = self.error_code(), "Server error occurred");
        } else {
            warn!(error = %self, code = self.error_code(), "Request failed");
        }

        (
            status,
            [(header::CACHE_CONTROL, NO_STORE)],
            Json(self.body()),
        )
            .into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
