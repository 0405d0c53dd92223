/**
 * Server Initialization
 *
 * Builds the application state and router:
 *
 * 1. Select stores: PostgreSQL when `DATABASE_URL` is set, in-memory otherwise
 * 2. Create the token issuer (fails on an empty signing key)
 * 3. Seed the administrator and customer accounts
 * 4. Create the router
 *
 * A configured database that cannot be reached or migrated aborts startup.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::identity::IdentityError;
use crate::backend::auth::seed::seed_users;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::PgIdentityProvider;
use crate::backend::authors::PgAuthorRepository;
use crate::backend::books::PgBookRepository;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, AppConfig, ConfigError};
use crate::backend::server::state::AppState;

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Token configuration error: {0}")]
    Token(#[from] TokenError),

    #[error("Failed to seed users: {0}")]
    Seed(#[from] IdentityError),
}

/// Build the application state for `config`
pub async fn build_state(config: AppConfig) -> Result<AppState, StartupError> {
    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = load_database(&url).await?;
            AppState::new(
                config,
                Arc::new(PgAuthorRepository::new(pool.clone())),
                Arc::new(PgBookRepository::new(pool.clone())),
                Arc::new(PgIdentityProvider::new(pool)),
            )?
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory stores.");
            AppState::in_memory(config)?
        }
    };

    seed_users(state.identity.as_ref(), &state.config.seed).await?;

    Ok(state)
}

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing bookstore API server");

    let state = build_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
