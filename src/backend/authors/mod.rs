//! Authors
//!
//! The `Author` entity and its wiring into the generic resource controller.
//! Routes live under `/api/authors` and are open to anonymous callers.
//!
//! # Module Structure
//!
//! ```text
//! authors/
//! ├── mod.rs  - Author entity and AuthorsResource
//! └── db.rs   - PostgreSQL repository
//! ```

/// PostgreSQL repository for authors
pub mod db;

use crate::backend::resource::Resource;
use crate::backend::server::state::AppState;
use crate::backend::store::{Entity, RepositoryArc};
use crate::shared::{AuthorCreateDto, AuthorDto, AuthorUpdateDto};

pub use db::PgAuthorRepository;

/// Author record as persisted by the entity store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub bio: Option<String>,
}

impl Entity for Author {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// `/api/authors` resource
pub struct AuthorsResource;

impl Resource for AuthorsResource {
    const NAME: &'static str = "Authors";
    const SINGULAR: &'static str = "author";
    const PATH: &'static str = "/api/authors";

    type Entity = Author;
    type ReadDto = AuthorDto;
    type CreateDto = AuthorCreateDto;
    type UpdateDto = AuthorUpdateDto;

    fn update_id(dto: &AuthorUpdateDto) -> i32 {
        dto.id
    }

    fn repository(state: &AppState) -> RepositoryArc<Author> {
        state.authors.clone()
    }
}
