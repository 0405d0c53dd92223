//! Backend Module
//!
//! Server-side code for the bookstore API. Only compiled with the `ssr`
//! feature.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, startup
//! - **`routes`** - route tables and cross-cutting layers
//! - **`resource`** - generic CRUD controller shared by authors and books
//! - **`authors`**, **`books`** - entities, resource wiring, PostgreSQL repositories
//! - **`mapping`** - entity/DTO conversions
//! - **`store`** - `Repository` trait and the in-memory implementation
//! - **`auth`** - identity provider, token issuer, seeding, login handler
//! - **`middleware`** - bearer token verification and role check
//! - **`home`** - demo controller
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs         - Server binary
//! ├── server/
//! ├── routes/
//! ├── resource/
//! ├── authors/
//! ├── books/
//! ├── mapping.rs
//! ├── store/
//! ├── auth/
//! ├── middleware/
//! ├── home/
//! └── error/
//! ```
//!
//! # State Management
//!
//! `AppState` holds the read-only configuration and `Arc`-shared
//! collaborators. The in-memory stores guard their maps with
//! `tokio::sync::RwLock`; concurrent writes to one id are last-write-wins.

/// Server initialization, configuration and state
pub mod server;

/// Route configuration
pub mod routes;

/// Generic CRUD controller
pub mod resource;

/// Author entity and repository
pub mod authors;

/// Book entity and repository
pub mod books;

/// Entity/DTO mapping
pub mod mapping;

/// Entity store abstraction
pub mod store;

/// Authentication and session tokens
pub mod auth;

/// Request middleware
pub mod middleware;

/// Demo controller
pub mod home;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppConfig, AppState};
