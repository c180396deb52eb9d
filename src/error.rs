//! Error types for the contacts manager.
//!
//! This module defines custom error types using `thiserror`. Validation
//! problems with a submitted contact are not errors here; they are ordinary
//! values (see `services::ValidationFailure`) rendered back to the user.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that end a request early.
///
/// Handlers return these and the response conversion logs them and answers
/// with a safe status, so no request error ever takes the process down.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request body could not be read as the expected form
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A page template failed to render
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// HTTP status sent for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) => StatusCode::NOT_FOUND,
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        (status, status.canonical_reason().unwrap_or("Error")).into_response()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::MalformedRequest("missing field `firstName`".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed request: missing field `firstName`"
        );

        let err = ConfigError::InvalidValue {
            var: "CONTACTS_PORT".to_string(),
            reason: "Must be a port number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACTS_PORT: Must be a port number"
        );
    }

    #[test]
    fn test_malformed_request_is_not_found() {
        let response = AppError::MalformedRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
