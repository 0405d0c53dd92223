//! Middleware Module
//!
//! - **`auth`** - bearer token verification and the administrator role check
//!
//! # Example
//!
//! ```rust,ignore
//! let books = Router::new()
//!     .route("/api/books", get(list::<BooksResource>))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, require_administrator, AuthenticatedUser};
