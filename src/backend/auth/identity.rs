/**
 * Identity Provider
 *
 * Credential verification and role lookup. The login handler only talks to
 * the [`IdentityProvider`] trait; two implementations exist:
 *
 * - [`MemoryIdentityProvider`] - users held in process, used when no
 *   database is configured and in tests
 * - `PgIdentityProvider` (in `users`) - users, roles and memberships in
 *   PostgreSQL
 *
 * Passwords are stored as bcrypt hashes. A user whose `lockout_end` lies in
 * the future cannot sign in; lockout bookkeeping itself is outside this
 * crate.
 */

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

/// User record owned by the identity provider
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct IdentityUser {
    /// Internal user id (UUID string)
    pub id: String,
    /// Login name
    pub username: String,
    /// Email address, used as the token subject
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Sign-in is refused until this instant
    pub lockout_end: Option<DateTime<Utc>>,
}

impl IdentityUser {
    /// Whether the account is locked out at `now`
    pub fn is_locked_out(&self, now: DateTime<Utc>) -> bool {
        self.lockout_end.is_some_and(|end| end > now)
    }
}

/// Data needed to register a user
#[derive(Clone)]
pub struct NewIdentityUser {
    pub username: String,
    pub email: String,
    /// Plaintext password, hashed by the provider before storage
    pub password: String,
}

/// Result of a password sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Username and password match and the account is usable
    Succeeded,
    /// Unknown username or wrong password
    Failed,
    /// Credentials may be valid but the account is locked out
    LockedOut,
}

/// Identity provider failures
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Credential verification and role lookup
#[async_trait]
pub trait IdentityProvider: Debug + Send + Sync {
    /// Look a user up by username (case-insensitive)
    async fn find_by_name(&self, username: &str) -> IdentityResult<Option<IdentityUser>>;

    /// Names of the roles `user` belongs to
    async fn get_roles(&self, user: &IdentityUser) -> IdentityResult<Vec<String>>;

    /// Register a user with the given roles
    async fn create_user(
        &self,
        user: NewIdentityUser,
        roles: &[String],
    ) -> IdentityResult<IdentityUser>;

    /// Verify a username/password pair
    ///
    /// Unknown usernames and wrong passwords both yield
    /// [`SignInOutcome::Failed`].
    async fn password_sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> IdentityResult<SignInOutcome> {
        let user = match self.find_by_name(username).await? {
            Some(user) => user,
            None => return Ok(SignInOutcome::Failed),
        };

        if user.is_locked_out(Utc::now()) {
            return Ok(SignInOutcome::LockedOut);
        }

        if bcrypt::verify(password, &user.password_hash)? {
            Ok(SignInOutcome::Succeeded)
        } else {
            Ok(SignInOutcome::Failed)
        }
    }
}

/// Shared handle to an identity provider
pub type IdentityProviderArc = Arc<dyn IdentityProvider>;

#[derive(Debug, Clone)]
struct StoredUser {
    user: IdentityUser,
    roles: Vec<String>,
}

/// In-memory identity provider
#[derive(Debug)]
pub struct MemoryIdentityProvider {
    users: RwLock<HashMap<String, StoredUser>>,
    hash_cost: u32,
}

impl Default for MemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryIdentityProvider {
    /// Creates an empty provider hashing with `bcrypt::DEFAULT_COST`.
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Creates an empty provider with a custom bcrypt cost.
    pub fn with_cost(hash_cost: u32) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            hash_cost,
        }
    }

    /// Insert a fully formed user, replacing any user with the same name.
    pub async fn insert(&self, user: IdentityUser, roles: Vec<String>) {
        self.users
            .write()
            .await
            .insert(user.username.to_lowercase(), StoredUser { user, roles });
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn find_by_name(&self, username: &str) -> IdentityResult<Option<IdentityUser>> {
        let users = self.users.read().await;
        Ok(users.get(&username.to_lowercase()).map(|stored| stored.user.clone()))
    }

    async fn get_roles(&self, user: &IdentityUser) -> IdentityResult<Vec<String>> {
        let users = self.users.read().await;
        Ok(users
            .get(&user.username.to_lowercase())
            .map(|stored| stored.roles.clone())
            .unwrap_or_default())
    }

    async fn create_user(
        &self,
        user: NewIdentityUser,
        roles: &[String],
    ) -> IdentityResult<IdentityUser> {
        let password_hash = bcrypt::hash(&user.password, self.hash_cost)?;
        let created = IdentityUser {
            id: uuid::Uuid::new_v4().to_string(),
            username: user.username,
            email: user.email,
            password_hash,
            lockout_end: None,
        };
        self.insert(created.clone(), roles.to_vec()).await;
        Ok(created)
    }
}
