//! Entity Store
//!
//! The persistence seam for authors and books. Controllers only see the
//! [`Repository`] trait; the concrete store is chosen at startup:
//!
//! - [`memory::MemoryRepository`] when no `DATABASE_URL` is configured (and in tests)
//! - `PgAuthorRepository` / `PgBookRepository` backed by a `sqlx` Postgres pool
//!
//! All operations are keyed by the integer id assigned by the store on
//! create. There is no locking across calls: two concurrent updates of the
//! same id both succeed and the last write wins.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// In-memory repository
pub mod memory;

pub use memory::MemoryRepository;

/// A persisted record with a store-assigned integer id
pub trait Entity: Debug + Clone + Send + Sync + 'static {
    /// Store-assigned id (0 before the record is created)
    fn id(&self) -> i32;

    /// Set the id, used by stores when a record is created
    fn set_id(&mut self, id: i32);
}

/// Entity store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other failure reported by a store implementation
    #[error("Store error: {message}")]
    Other {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    /// Create a store error that does not originate from the database driver
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD operations over one entity type
#[async_trait]
pub trait Repository<T: Entity>: Debug + Send + Sync {
    /// All records, ordered by id
    async fn find_all(&self) -> StoreResult<Vec<T>>;

    /// The record with `id`, if any
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<T>>;

    /// Whether a record with `id` exists
    async fn exists(&self, id: i32) -> StoreResult<bool>;

    /// Persist a new record; the id on `entity` is ignored and the stored
    /// record (with its assigned id) is returned
    async fn create(&self, entity: T) -> StoreResult<T>;

    /// Replace the record with `entity.id()`. Returns `false` if nothing was
    /// written.
    async fn update(&self, entity: T) -> StoreResult<bool>;

    /// Remove the record with `id`. Returns `false` if nothing was removed.
    async fn delete(&self, id: i32) -> StoreResult<bool>;
}

/// Shared handle to a repository, as held in application state
pub type RepositoryArc<T> = Arc<dyn Repository<T>>;
