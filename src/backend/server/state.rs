/**
 * Application State Management
 *
 * `AppState` is the central state container handed to every handler. It
 * holds the read-only configuration and `Arc`-shared collaborators:
 *
 * - author and book repositories (PostgreSQL or in-memory)
 * - the identity provider
 * - the token issuer
 *
 * `FromRef` implementations let handlers extract only the part they need,
 * e.g. `State<IdentityProviderArc>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::identity::{IdentityProviderArc, MemoryIdentityProvider};
use crate::backend::auth::sessions::{TokenError, TokenIssuer};
use crate::backend::authors::Author;
use crate::backend::books::Book;
use crate::backend::server::config::AppConfig;
use crate::backend::store::{MemoryRepository, RepositoryArc};

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<AppConfig>,

    pub authors: RepositoryArc<Author>,
    pub books: RepositoryArc<Book>,

    /// Password sign-in and role lookup
    pub identity: IdentityProviderArc,

    /// Signs tokens on login, verifies them in the auth middleware
    pub token_issuer: Arc<TokenIssuer>,
}

impl AppState {
    /// Assemble state from its collaborators
    ///
    /// # Errors
    /// [`TokenError::MissingKey`] if the configured signing key is empty
    pub fn new(
        config: AppConfig,
        authors: RepositoryArc<Author>,
        books: RepositoryArc<Book>,
        identity: IdentityProviderArc,
    ) -> Result<Self, TokenError> {
        let token_issuer = TokenIssuer::new(config.jwt.key.clone(), config.jwt.issuer.clone())?;
        Ok(Self {
            config: Arc::new(config),
            authors,
            books,
            identity,
            token_issuer: Arc::new(token_issuer),
        })
    }

    /// State backed entirely by in-memory stores
    pub fn in_memory(config: AppConfig) -> Result<Self, TokenError> {
        Self::new(
            config,
            Arc::new(MemoryRepository::<Author>::new()),
            Arc::new(MemoryRepository::<Book>::new()),
            Arc::new(MemoryIdentityProvider::new()),
        )
    }
}

impl FromRef<AppState> for IdentityProviderArc {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identity.clone()
    }
}

impl FromRef<AppState> for Arc<TokenIssuer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_issuer.clone()
    }
}
