//! Authentication test helpers
//!
//! Tokens are signed with the application's own issuer, so they pass the
//! auth middleware exactly like tokens returned by `POST /api/users`.

use axum::http::HeaderValue;
use bookstore_api::backend::auth::IdentityUser;
use bookstore_api::backend::server::AppState;
use chrono::{DateTime, Utc};

pub const ADMIN_EMAIL: &str = "admin@bookstore.com";
pub const ADMIN_PASSWORD: &str = "Adm1n-Pa55";
pub const CUSTOMER_EMAIL: &str = "customer1@gmail.com";
pub const CUSTOMER_PASSWORD: &str = "Cust0mer-Pa55";
pub const LOCKED_EMAIL: &str = "locked@bookstore.com";
pub const LOCKED_PASSWORD: &str = "L0cked-Pa55";

fn token_user(email: &str) -> IdentityUser {
    IdentityUser {
        id: uuid::Uuid::new_v4().to_string(),
        username: email.to_string(),
        email: email.to_string(),
        password_hash: String::new(),
        lockout_end: None,
    }
}

/// Generate a token for `email` holding `roles`
pub fn generate_test_token(state: &AppState, email: &str, roles: &[&str]) -> String {
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    state
        .token_issuer
        .issue(&token_user(email), &roles)
        .expect("Failed to generate test token")
        .token
}

/// Generate a token issued at `issued_at`
pub fn generate_test_token_at(
    state: &AppState,
    email: &str,
    roles: &[&str],
    issued_at: DateTime<Utc>,
) -> String {
    let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    state
        .token_issuer
        .issue_at(&token_user(email), &roles, issued_at)
        .expect("Failed to generate test token")
        .token
}

pub fn admin_token(state: &AppState) -> String {
    generate_test_token(state, ADMIN_EMAIL, &["Administrator"])
}

pub fn customer_token(state: &AppState) -> String {
    generate_test_token(state, CUSTOMER_EMAIL, &["Customer"])
}

/// Create authorization header value
pub fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value")
}
