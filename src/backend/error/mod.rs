//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Status Codes
//!
//! | Variant | Status |
//! |---|---|
//! | `BadRequest`, `SharedError` | 400 |
//! | `Unauthorized`, `LoginRejected` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `Internal` | 500 |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};
