//! Database operations for authors

use async_trait::async_trait;
use sqlx::PgPool;

use super::Author;
use crate::backend::store::{Repository, StoreResult};

/// Load all authors ordered by id
pub async fn load_authors(pool: &PgPool) -> Result<Vec<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        SELECT id, name, last_name, bio
        FROM authors
        ORDER BY id
        "#
    )
    .fetch_all(pool)
    .await
}

/// Get author by ID
pub async fn get_author_by_id(pool: &PgPool, id: i32) -> Result<Option<Author>, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        SELECT id, name, last_name, bio
        FROM authors
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Check whether an author exists
pub async fn author_exists(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}

/// Insert an author, returning the stored row with its generated id
pub async fn insert_author(pool: &PgPool, author: &Author) -> Result<Author, sqlx::Error> {
    sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO authors (name, last_name, bio)
        VALUES ($1, $2, $3)
        RETURNING id, name, last_name, bio
        "#
    )
    .bind(&author.name)
    .bind(&author.last_name)
    .bind(&author.bio)
    .fetch_one(pool)
    .await
}

/// Overwrite every column of an author
pub async fn update_author(pool: &PgPool, author: &Author) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE authors
        SET name = $1, last_name = $2, bio = $3
        WHERE id = $4
        "#
    )
    .bind(&author.name)
    .bind(&author.last_name)
    .bind(&author.bio)
    .bind(author.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an author by ID
pub async fn delete_author(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM authors WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Author repository backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Author> for PgAuthorRepository {
    async fn find_all(&self) -> StoreResult<Vec<Author>> {
        Ok(load_authors(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Author>> {
        Ok(get_author_by_id(&self.pool, id).await?)
    }

    async fn exists(&self, id: i32) -> StoreResult<bool> {
        Ok(author_exists(&self.pool, id).await?)
    }

    async fn create(&self, entity: Author) -> StoreResult<Author> {
        Ok(insert_author(&self.pool, &entity).await?)
    }

    async fn update(&self, entity: Author) -> StoreResult<bool> {
        Ok(update_author(&self.pool, &entity).await?)
    }

    async fn delete(&self, id: i32) -> StoreResult<bool> {
        Ok(delete_author(&self.pool, id).await?)
    }
}
