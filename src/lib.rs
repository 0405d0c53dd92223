//! Bookstore API - Main Library
//!
//! A small REST backend for a bookstore catalog built on Axum: CRUD endpoints
//! for authors and books, a login endpoint issuing short-lived bearer tokens,
//! and a demo "home" controller.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire DTOs and their validation rules
//!   - Author/book read, create and update shapes
//!   - Login request and token response
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, state and configuration
//!   - Entity store trait with in-memory and PostgreSQL implementations
//!   - Identity provider, token issuer and auth middleware
//!   - Resource controllers and entity/DTO mapping
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enabled by default)
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookstore_api::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Store, identity and token
//! failures all collapse into a generic `500` at the handler boundary; the
//! detailed message only goes to the log.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
