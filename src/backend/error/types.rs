/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - Missing, unparseable or invalid request bodies (400)
 * - Path id below 1 or disagreeing with the body id (400)
 * - Unknown ids (404)
 * - Bad credentials, missing or invalid bearer tokens (401)
 * - Authenticated callers without the required role (403)
 *
 * ## Internal faults
 *
 * Store, identity provider and token issuer failures. These are answered
 * with a generic message; the detailed message is written to the log when
 * the response is built.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::{RejectedLogin, SharedError};

/// Message returned to clients for every internal fault
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Please contact the administrator";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use bookstore_api::backend::error::BackendError;
///
/// let err = BackendError::bad_request("Id mismatch");
/// let err = BackendError::not_found("Author with id 4 was not found");
/// let err = BackendError::internal("Authors - Create: Author creation failed");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed, missing or inconsistent input
    #[error("Bad request: {message}")]
    BadRequest {
        /// Human-readable error message
        message: String,
    },

    /// DTO failed field validation or could not be parsed
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// No record with the requested id
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Missing, malformed or expired bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Credentials were rejected by the identity provider
    ///
    /// The response body echoes the submitted username only.
    #[error("Login rejected for {}", .0.username)]
    LoginRejected(RejectedLogin),

    /// Authenticated caller lacks a required role
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Store, identity or token fault
    ///
    /// `message` is logged, never sent to the client.
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed message for the log sink
        message: String,
    },
}

impl BackendError {
    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a new not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new internal error
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookstore_api::backend::error::BackendError;
    ///
    /// let err = BackendError::internal("Books - Delete: connection reset");
    /// assert_eq!(err.status_code().as_u16(), 500);
    /// ```
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `BadRequest`, `SharedError` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized`, `LoginRejected` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::LoginRejected(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message that may be shown to the client
    ///
    /// Internal faults always yield [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::NotFound { message } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::LoginRejected(rejected) => format!("{} not authenticated", rejected.username),
            Self::Forbidden { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
