//! Authentication Module
//!
//! Identity lookup, password sign-in and session token issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and role names
//! ├── identity.rs     - IdentityProvider trait and in-memory provider
//! ├── users.rs        - PostgreSQL identity provider
//! ├── sessions.rs     - Token issuing and verification
//! ├── seed.rs         - Startup seeding of the admin and customer accounts
//! └── handlers/
//!     └── login.rs    - POST /api/users
//! ```
//!
//! # Login Flow
//!
//! 1. Username and password are checked by the identity provider
//! 2. Locked-out accounts are rejected like bad credentials
//! 3. The user's roles are loaded and embedded in a 5 minute HS256 token
//!
//! Rejections answer 401 with the submitted username; the password is never
//! echoed.

/// Identity provider trait and in-memory implementation
pub mod identity;

/// PostgreSQL identity provider
pub mod users;

/// Token issuing and verification
pub mod sessions;

/// Startup seeding
pub mod seed;

/// HTTP handlers for authentication endpoints
pub mod handlers;

/// Role allowed to modify books
pub const ADMINISTRATOR_ROLE: &str = "Administrator";

/// Role given to the seeded customer account
pub const CUSTOMER_ROLE: &str = "Customer";

pub use handlers::login;
pub use identity::{
    IdentityError, IdentityProvider, IdentityProviderArc, IdentityUser, MemoryIdentityProvider,
    NewIdentityUser, SignInOutcome,
};
pub use sessions::{Claims, IssuedToken, TokenError, TokenIssuer, TOKEN_LIFETIME_SECONDS};
pub use users::PgIdentityProvider;
