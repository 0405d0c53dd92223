/**
 * Login Handler
 *
 * `POST /api/users`
 *
 * 1. Parse and validate the body (400 if absent, malformed or missing a field)
 * 2. Password sign-in through the identity provider
 * 3. Load the user's record and roles
 * 4. Issue a session token
 *
 * A wrong password, unknown user or locked-out account answers 401 with
 * the submitted username only. The password is never logged or echoed.
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use validator::Validate;

use crate::backend::auth::identity::{IdentityProviderArc, SignInOutcome};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::BackendError;
use crate::shared::{LoginRequest, RejectedLogin, SharedError, TokenResponse};

const LOCATION: &str = "Users - Login";

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "admin@bookstore.com", "password": "..." }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(identity): State<IdentityProviderArc>,
    State(issuer): State<Arc<TokenIssuer>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!("{}: Empty or malformed request was submitted", LOCATION);
        BackendError::from(SharedError::serialization(rejection.body_text()))
    })?;
    request.validate().map_err(|errors| {
        tracing::warn!("{}: Data was incomplete", LOCATION);
        BackendError::from(SharedError::from(errors))
    })?;
    tracing::info!("{}: Login attempted for user: {}", LOCATION, request.username);

    let outcome = identity
        .password_sign_in(&request.username, &request.password)
        .await
        .map_err(|e| BackendError::internal(format!("{}: {}", LOCATION, e)))?;

    match outcome {
        SignInOutcome::Succeeded => {}
        SignInOutcome::Failed => {
            tracing::warn!("{}: Invalid credentials for user: {}", LOCATION, request.username);
            return Err(BackendError::LoginRejected(RejectedLogin::from(&request)));
        }
        SignInOutcome::LockedOut => {
            tracing::warn!("{}: User is locked out: {}", LOCATION, request.username);
            return Err(BackendError::LoginRejected(RejectedLogin::from(&request)));
        }
    }

    let user = identity
        .find_by_name(&request.username)
        .await
        .map_err(|e| BackendError::internal(format!("{}: {}", LOCATION, e)))?
        .ok_or_else(|| {
            BackendError::internal(format!(
                "{}: User {} vanished after sign-in",
                LOCATION, request.username
            ))
        })?;
    let roles = identity
        .get_roles(&user)
        .await
        .map_err(|e| BackendError::internal(format!("{}: {}", LOCATION, e)))?;

    let issued = issuer
        .issue(&user, &roles)
        .map_err(|e| BackendError::internal(format!("{}: Failed to create token: {}", LOCATION, e)))?;

    tracing::info!("{}: User logged in successfully: {}", LOCATION, user.email);
    Ok(Json(TokenResponse { token: issued.token }))
}
