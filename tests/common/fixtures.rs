//! Test application fixtures
//!
//! `spawn_app` builds the real router over in-memory collaborators. The
//! catalog repositories are wrapped in [`RecordingRepository`] so tests can
//! assert that a request never reached the store.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use bookstore_api::backend::auth::{
    IdentityProvider, IdentityUser, MemoryIdentityProvider, NewIdentityUser,
};
use bookstore_api::backend::authors::Author;
use bookstore_api::backend::books::Book;
use bookstore_api::backend::routes::create_router;
use bookstore_api::backend::server::config::{AppConfig, JwtConfig, SeedConfig};
use bookstore_api::backend::server::AppState;
use bookstore_api::backend::store::{
    Entity, MemoryRepository, Repository, RepositoryArc, StoreError, StoreResult,
};
use chrono::{Duration, Utc};

use super::auth_helpers::*;

pub const TEST_JWT_KEY: &str = "integration-test-signing-key";
pub const TEST_ISSUER: &str = "bookstore-api";
const TEST_HASH_COST: u32 = 4;

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: None,
        jwt: JwtConfig {
            key: TEST_JWT_KEY.to_string(),
            issuer: TEST_ISSUER.to_string(),
        },
        seed: SeedConfig::default(),
    }
}

/// Repository wrapper counting every call that reaches the store
#[derive(Debug)]
pub struct RecordingRepository<T> {
    inner: MemoryRepository<T>,
    calls: AtomicUsize,
}

impl<T: Entity> RecordingRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: MemoryRepository::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_data(records: Vec<T>) -> Self {
        Self {
            inner: MemoryRepository::with_data(records),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for RecordingRepository<T> {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        self.record();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<T>> {
        self.record();
        self.inner.find_by_id(id).await
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        self.record();
        self.inner.exists(id).await
    }

    async fn create(&self, entity: T) -> StoreResult<T> {
        self.record();
        self.inner.create(entity).await
    }

    async fn update(&self, entity: T) -> StoreResult<bool> {
        self.record();
        self.inner.update(entity).await
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        self.record();
        self.inner.delete(id).await
    }
}

/// Repository whose every call fails
#[derive(Debug, Default)]
pub struct FailingRepository;

#[async_trait]
impl<T: Entity> Repository<T> for FailingRepository {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        Err(StoreError::other("connection refused"))
    }

    async fn find_by_id(&self, _id: i32) -> StoreResult<Option<T>> {
        Err(StoreError::other("connection refused"))
    }

    async fn exists(&self, _id: i32) -> StoreResult<bool> {
        Err(StoreError::other("connection refused"))
    }

    async fn create(&self, _entity: T) -> StoreResult<T> {
        Err(StoreError::other("connection refused"))
    }

    async fn update(&self, _entity: T) -> StoreResult<bool> {
        Err(StoreError::other("connection refused"))
    }

    async fn delete(&self, _id: i32) -> StoreResult<bool> {
        Err(StoreError::other("connection refused"))
    }
}

/// Repository that panics on every read
#[derive(Debug, Default)]
pub struct PanickingRepository;

#[async_trait]
impl<T: Entity> Repository<T> for PanickingRepository {
    async fn find_all(&self) -> StoreResult<Vec<T>> {
        panic!("store exploded")
    }

    async fn find_by_id(&self, _id: i32) -> StoreResult<Option<T>> {
        panic!("store exploded")
    }

    async fn exists(&self, _id: i32) -> StoreResult<bool> {
        panic!("store exploded")
    }

    async fn create(&self, _entity: T) -> StoreResult<T> {
        panic!("store exploded")
    }

    async fn update(&self, _entity: T) -> StoreResult<bool> {
        panic!("store exploded")
    }

    async fn delete(&self, _id: i32) -> StoreResult<bool> {
        panic!("store exploded")
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub authors: Arc<RecordingRepository<Author>>,
    pub books: Arc<RecordingRepository<Book>>,
}

/// Identity provider holding an administrator, a customer and a locked-out user
pub async fn test_identity() -> Arc<MemoryIdentityProvider> {
    let identity = MemoryIdentityProvider::with_cost(TEST_HASH_COST);
    identity
        .create_user(
            NewIdentityUser {
                username: ADMIN_EMAIL.to_string(),
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            },
            &["Administrator".to_string()],
        )
        .await
        .expect("Failed to create admin");
    identity
        .create_user(
            NewIdentityUser {
                username: CUSTOMER_EMAIL.to_string(),
                email: CUSTOMER_EMAIL.to_string(),
                password: CUSTOMER_PASSWORD.to_string(),
            },
            &["Customer".to_string()],
        )
        .await
        .expect("Failed to create customer");
    identity
        .insert(
            IdentityUser {
                id: uuid::Uuid::new_v4().to_string(),
                username: LOCKED_EMAIL.to_string(),
                email: LOCKED_EMAIL.to_string(),
                password_hash: bcrypt::hash(LOCKED_PASSWORD, TEST_HASH_COST)
                    .expect("Failed to hash password"),
                lockout_end: Some(Utc::now() + Duration::hours(1)),
            },
            vec!["Customer".to_string()],
        )
        .await;
    Arc::new(identity)
}

fn server_for(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

/// Spawn the application over empty catalog stores
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Vec::new(), Vec::new()).await
}

/// Spawn the application over pre-filled catalog stores
pub async fn spawn_app_with(authors: Vec<Author>, books: Vec<Book>) -> TestApp {
    let authors = Arc::new(RecordingRepository::with_data(authors));
    let books = Arc::new(RecordingRepository::with_data(books));
    let identity = test_identity().await;
    let identity: Arc<dyn IdentityProvider> = identity;

    let state = AppState::new(
        test_config(),
        authors.clone() as RepositoryArc<Author>,
        books.clone() as RepositoryArc<Book>,
        identity,
    )
    .expect("Failed to build state");

    TestApp {
        server: server_for(state.clone()),
        state,
        authors,
        books,
    }
}

/// Spawn the application with explicit catalog repositories
pub async fn spawn_app_with_stores(
    authors: RepositoryArc<Author>,
    books: RepositoryArc<Book>,
) -> (TestServer, AppState) {
    let state = AppState::new(test_config(), authors, books, test_identity().await)
        .expect("Failed to build state");
    (server_for(state.clone()), state)
}

pub fn sample_author(id: i32) -> Author {
    Author {
        id,
        name: "Ursula".to_string(),
        last_name: "Le Guin".to_string(),
        bio: Some("Earthsea".to_string()),
    }
}

pub fn sample_book(id: i32, author_id: i32) -> Book {
    Book {
        id,
        title: "A Wizard of Earthsea".to_string(),
        year: Some(1968),
        isbn: "978-0547773742".to_string(),
        summary: Some("Ged's apprenticeship".to_string()),
        image: None,
        price: Some(9.99),
        author_id: Some(author_id),
    }
}
