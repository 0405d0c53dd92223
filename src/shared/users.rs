//! Login DTOs
//!
//! Bodies exchanged with `POST /api/users`.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Login request
///
/// `Debug` is implemented by hand so the password never reaches a log line.
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token, valid for five minutes
    pub token: String,
}

/// Body of a `401` login response
///
/// Echoes the submitted username for client-side diagnostics. There is no
/// password field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedLogin {
    pub username: String,
}

impl From<&LoginRequest> for RejectedLogin {
    fn from(request: &LoginRequest) -> Self {
        Self {
            username: request.username.clone(),
        }
    }
}
