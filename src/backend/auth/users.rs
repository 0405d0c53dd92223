/**
 * User Model and Database Operations
 *
 * PostgreSQL side of the identity provider: users, roles and role
 * memberships (see `migrations/`).
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::auth::identity::{
    IdentityProvider, IdentityResult, IdentityUser, NewIdentityUser,
};

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Login name
/// * `email` - User email
/// * `password_hash` - Hashed password
/// * `roles` - Role names; missing roles are created
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
    roles: &[String],
) -> Result<IdentityUser, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let user = sqlx::query_as::<_, IdentityUser>(
        r#"
        INSERT INTO users (id, username, email, password_hash, lockout_end, created_at)
        VALUES ($1, $2, $3, $4, NULL, $5)
        RETURNING id, username, email, password_hash, lockout_end
        "#
    )
    .bind(&id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for role in roles {
        sqlx::query("INSERT INTO roles (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(role)
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "INSERT INTO user_roles (user_id, role_name) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(&user.id)
        .bind(role)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(user)
}

/// Get user by username (case-insensitive)
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<IdentityUser>, sqlx::Error> {
    sqlx::query_as::<_, IdentityUser>(
        r#"
        SELECT id, username, email, password_hash, lockout_end
        FROM users
        WHERE lower(username) = lower($1)
        "#
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get the role names of a user, sorted
pub async fn get_user_roles(pool: &PgPool, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT role_name
        FROM user_roles
        WHERE user_id = $1
        ORDER BY role_name
        "#
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Identity provider backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn find_by_name(&self, username: &str) -> IdentityResult<Option<IdentityUser>> {
        Ok(get_user_by_username(&self.pool, username).await?)
    }

    async fn get_roles(&self, user: &IdentityUser) -> IdentityResult<Vec<String>> {
        Ok(get_user_roles(&self.pool, &user.id).await?)
    }

    async fn create_user(
        &self,
        user: NewIdentityUser,
        roles: &[String],
    ) -> IdentityResult<IdentityUser> {
        let password_hash = bcrypt::hash(&user.password, bcrypt::DEFAULT_COST)?;
        Ok(create_user(&self.pool, &user.username, &user.email, &password_hash, roles).await?)
    }
}
