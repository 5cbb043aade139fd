//! JSON error responses.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::views::ViewError;
use repairdesk_core::auth::PasswordError;
use repairdesk_db::RepoError;
use repairdesk_shared::{AppError, JwtError};

/// Message of every rejected credential check.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`AppError`] rendered as `{"error": CODE, "message": ...}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// The uniform rejection of the auth extractors.
    #[must_use]
    pub fn credentials() -> Self {
        Self(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
    }

    /// Returns the wrapped error.
    #[must_use]
    pub const fn inner(&self) -> &AppError {
        &self.0
    }

    /// Message safe to show to the caller. Server-side details stay in the log.
    #[must_use]
    pub fn public_message(&self) -> &str {
        if self.0.is_server_error() {
            "An internal error occurred"
        } else {
            self.0.message()
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        Self(err.into())
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "request failed");
        }

        let body = Json(json!({
            "error": self.0.error_code(),
            "message": self.public_message(),
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
