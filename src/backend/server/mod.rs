//! Server Module
//!
//! - **`config`** - environment configuration and database connection
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - state assembly, seeding and router creation
//!
//! # Example
//!
//! ```rust,no_run
//! use bookstore_api::backend::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::AppConfig;
pub use init::{build_state, create_app, StartupError};
pub use state::AppState;
