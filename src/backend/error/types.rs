/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses with a JSON `{error}` body.
 *
 * # Error Categories
 *
 * - Handler errors carry an explicit status code and user-facing message
 *   ("Username already exists", "Username or password incorrect").
 * - Database, token, and OAuth errors wrap the underlying failure and map
 *   to 500; the original message is logged, not exposed.
 * - Unavailable marks endpoints whose backing service (database, OAuth
 *   configuration) is not configured.
 */

use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant can be converted to an HTTP response; see the
/// `IntoResponse` implementation in `error::conversion`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status and user-facing message
    #[error("{message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// User-facing error message
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// JWT creation or verification error
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// OAuth flow error (token exchange, profile fetch)
    #[error("OAuth error: {message}")]
    OauthError {
        /// Human-readable error message
        message: String,
    },

    /// A required service (database, OAuth provider) is not configured
    #[error("{service} is not configured")]
    Unavailable {
        /// Name of the missing service
        service: &'static str,
    },

    /// Shared error (validation, serialization)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new OAuth error
    pub fn oauth(message: impl Into<String>) -> Self {
        Self::OauthError {
            message: message.into(),
        }
    }

    /// Create a new unavailable-service error
    pub fn unavailable(service: &'static str) -> Self {
        Self::Unavailable { service }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - the status carried by the error
    /// - `DatabaseError`, `TokenError`, `OauthError` - 500 Internal Server Error
    /// - `Unavailable` - 503 Service Unavailable
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - `SharedError::AuthError` - 401 Unauthorized
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::TokenError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::OauthError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::AuthError { .. } => StatusCode::UNAUTHORIZED,
            },
        }
    }

    /// Get the user-facing error message
    ///
    /// Internal failures (database, token, OAuth) are collapsed to a
    /// generic message; the detail is logged where the error originates.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::DatabaseError(_) | Self::TokenError(_) | Self::OauthError { .. } => {
                "Server error".to_string()
            }
            Self::Unavailable { service } => format!("{} is not configured", service),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::CONFLICT, "Username already exists");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "Username already exists");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let handler_error = BackendError::handler(StatusCode::UNAUTHORIZED, "Unauthorized");
        assert_eq!(handler_error.status_code(), StatusCode::UNAUTHORIZED);

        let unavailable = BackendError::unavailable("Database");
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let oauth_error = BackendError::oauth("token exchange failed");
        assert_eq!(oauth_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let error: BackendError = SharedError::validation("username", "too short").into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.message().contains("too short"));
    }

    #[test]
    fn test_auth_error_is_unauthorized() {
        let error: BackendError = SharedError::auth("Username or password incorrect").into();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message(), "Username or password incorrect");
    }

    #[test]
    fn test_internal_detail_not_exposed() {
        let error = BackendError::oauth("secret detail");
        assert_eq!(error.message(), "Server error");
    }
}
