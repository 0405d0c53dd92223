/**
 * Server Configuration
 *
 * Read-only settings assembled once at startup from environment variables
 * (a `.env` file is loaded by `main` first).
 *
 * | Variable | Required | Default |
 * |---|---|---|
 * | `SERVER_PORT` | no | `3000` |
 * | `DATABASE_URL` | no | in-memory stores |
 * | `JWT_KEY` | yes | |
 * | `JWT_ISSUER` | no | `bookstore-api` |
 * | `SEED_ADMIN_PASSWORD` | no | admin account not seeded |
 * | `SEED_CUSTOMER_PASSWORD` | no | customer account not seeded |
 *
 * The issuer value is used for both the `iss` and `aud` token claims.
 */

use std::fmt;

use sqlx::PgPool;
use thiserror::Error;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_JWT_ISSUER: &str = "bookstore-api";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("JWT_KEY must be set to a non-empty value")]
    MissingJwtKey,

    #[error("SERVER_PORT is not a valid port: {value}")]
    InvalidPort { value: String },
}

/// Token signing settings
#[derive(Clone, PartialEq)]
pub struct JwtConfig {
    pub key: String,
    pub issuer: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("key", &"<redacted>")
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Passwords for the accounts seeded at startup
#[derive(Clone, Default, PartialEq)]
pub struct SeedConfig {
    pub admin_password: Option<String>,
    pub customer_password: Option<String>,
}

impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("admin_password", &self.admin_password.as_ref().map(|_| "<redacted>"))
            .field("customer_password", &self.customer_password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_port: u16,
    /// `None` selects the in-memory stores
    pub database_url: Option<String>,
    pub jwt: JwtConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let server_port = match get("SERVER_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_SERVER_PORT,
        };

        let key = get("JWT_KEY").ok_or(ConfigError::MissingJwtKey)?;
        let issuer = get("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string());

        Ok(Self {
            server_port,
            database_url: get("DATABASE_URL"),
            jwt: JwtConfig { key, issuer },
            seed: SeedConfig {
                admin_password: get("SEED_ADMIN_PASSWORD"),
                customer_password: get("SEED_CUSTOMER_PASSWORD"),
            },
        })
    }
}

/// Connect to PostgreSQL and run migrations
///
/// Unlike the in-memory fallback chosen when no URL is configured, a
/// configured but unreachable database is a startup error.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
