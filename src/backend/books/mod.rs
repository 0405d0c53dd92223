//! Books
//!
//! The `Book` entity and its wiring into the generic resource controller.
//! Every route under `/api/books` requires a valid bearer token; `POST`,
//! `PUT` and `DELETE` additionally require the `Administrator` role (see
//! `routes::api_routes`).

/// PostgreSQL repository for books
pub mod db;

use crate::backend::resource::Resource;
use crate::backend::server::state::AppState;
use crate::backend::store::{Entity, RepositoryArc};
use crate::shared::{BookCreateDto, BookDto, BookUpdateDto};

pub use db::PgBookRepository;

/// Book record as persisted by the entity store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub isbn: String,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    /// Reference to the book's author
    pub author_id: Option<i32>,
}

impl Entity for Book {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// `/api/books` resource
pub struct BooksResource;

impl Resource for BooksResource {
    const NAME: &'static str = "Books";
    const SINGULAR: &'static str = "book";
    const PATH: &'static str = "/api/books";

    type Entity = Book;
    type ReadDto = BookDto;
    type CreateDto = BookCreateDto;
    type UpdateDto = BookUpdateDto;

    fn update_id(dto: &BookUpdateDto) -> i32 {
        dto.id
    }

    fn repository(state: &AppState) -> RepositoryArc<Book> {
        state.books.clone()
    }
}
