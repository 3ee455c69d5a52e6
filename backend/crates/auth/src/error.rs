//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No candidate matches the email/password pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Durable storage failed
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// Identity could not be encoded or decoded
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuthError {
    /// Convert to AppError
    ///
    /// Server-side details stay in the logs as the error source; the
    /// response only says what the user can act on.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::InvalidCredentials => AppError::unauthorized("Invalid credentials")
                .with_action("Check your email and password"),
            AuthError::Storage(e) => {
                AppError::internal("Session could not be updated").with_source(e)
            }
            AuthError::Serialization(e) => {
                AppError::internal("Session could not be updated").with_source(e)
            }
        }
    }

    fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Session storage error");
            }
            AuthError::Serialization(e) => {
                tracing::error!(error = %e, "Session serialization error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;
    use std::error::Error as _;

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        let app = AuthError::InvalidCredentials.into_app_error();

        assert_eq!(app.kind(), ErrorKind::Unauthorized);
        assert_eq!(app.status_code(), 401);
        assert_eq!(app.message(), "Invalid credentials");
        assert!(app.action().is_some());
    }

    #[test]
    fn test_storage_error_hides_details() {
        let err = AuthError::from(StorageError::InvalidKey("../x".to_string()));

        let app = err.into_app_error();

        assert_eq!(app.status_code(), 500);
        assert!(!app.message().contains("../x"));
        assert!(app.source().is_some_and(|e| e.to_string().contains("../x")));
    }
}
