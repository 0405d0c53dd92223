//! Authentication Handlers
//!
//! - **`login`** - `POST /api/users` - password sign-in, answers with a token

/// Login handler
pub mod login;

pub use login::login;
