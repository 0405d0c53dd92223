/**
 * Authentication Middleware
 *
 * `auth_middleware` verifies the bearer token (signature, issuer, audience,
 * expiry) and attaches an [`AuthenticatedUser`] to the request extensions.
 * `require_administrator` runs after it and rejects callers lacking the
 * `Administrator` role.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::Claims;
use crate::backend::auth::ADMINISTRATOR_ROLE;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.nameid,
            email: claims.sub,
            roles: claims.role,
        }
    }
}

/// Token part of a `Bearer` credential; the scheme name is matched case-insensitively
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing, malformed, expired or
/// signed for another issuer.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing bearer token")
        })?;

    let token = bearer_token(auth_header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized("Invalid Authorization header")
    })?;

    let claims = app_state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized("Invalid or expired token")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(claims));

    Ok(next.run(request).await)
}

/// Role check for administrative routes
///
/// Must be layered inside [`auth_middleware`]. A request without an
/// authenticated user answers 401; one without the role answers 403.
pub async fn require_administrator(request: Request, next: Next) -> Result<Response, BackendError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            BackendError::unauthorized("Authentication required")
        })?;

    if !user.has_role(ADMINISTRATOR_ROLE) {
        tracing::warn!("User {} lacks the {} role", user.email, ADMINISTRATOR_ROLE);
        return Err(BackendError::forbidden(format!(
            "The {} role is required",
            ADMINISTRATOR_ROLE
        )));
    }

    Ok(next.run(request).await)
}
