//! Route Configuration Module
//!
//! - **`router`** - router creation and cross-cutting layers
//! - **`api_routes`** - authors, books, users and home routes
//!
//! # Example
//!
//! ```rust,no_run
//! use bookstore_api::backend::routes::create_router;
//! use bookstore_api::backend::server::{AppConfig, AppState};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::in_memory(AppConfig::from_env()?)?;
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API route groups
pub mod api_routes;

pub use router::create_router;
