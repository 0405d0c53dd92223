//! Database operations for books

use async_trait::async_trait;
use sqlx::PgPool;

use super::Book;
use crate::backend::store::{Repository, StoreResult};

/// Load all books ordered by id
pub async fn load_books(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, year, isbn, summary, image, price, author_id
        FROM books
        ORDER BY id
        "#
    )
    .fetch_all(pool)
    .await
}

/// Get book by ID
pub async fn get_book_by_id(pool: &PgPool, id: i32) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        SELECT id, title, year, isbn, summary, image, price, author_id
        FROM books
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether a book exists
pub async fn book_exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Insert a book, returning the stored row with its generated id
pub async fn insert_book(pool: &PgPool, book: &Book) -> Result<Book, sqlx::Error> {
    sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (title, year, isbn, summary, image, price, author_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, title, year, isbn, summary, image, price, author_id
        "#
    )
    .bind(&book.title)
    .bind(book.year)
    .bind(&book.isbn)
    .bind(&book.summary)
    .bind(&book.image)
    .bind(book.price)
    .bind(book.author_id)
    .fetch_one(pool)
    .await
}

/// Overwrite every column of a book
pub async fn update_book(pool: &PgPool, book: &Book) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE books
        SET title = $1, year = $2, isbn = $3, summary = $4, image = $5, price = $6, author_id = $7
        WHERE id = $8
        "#
    )
    .bind(&book.title)
    .bind(book.year)
    .bind(&book.isbn)
    .bind(&book.summary)
    .bind(&book.image)
    .bind(book.price)
    .bind(book.author_id)
    .bind(book.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a book by ID
pub async fn delete_book(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM books WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Book repository backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Book> for PgBookRepository {
    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        Ok(load_books(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Book>> {
        Ok(get_book_by_id(&self.pool, id).await?)
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        Ok(book_exists(&self.pool, id).await?)
    }

    async fn create(&self, entity: Book) -> StoreResult<Book> {
        Ok(insert_book(&self.pool, &entity).await?)
    }

    async fn update(&self, entity: Book) -> StoreResult<bool> {
        Ok(update_book(&self.pool, &entity).await?)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        Ok(delete_book(&self.pool, id).await?)
    }
}
