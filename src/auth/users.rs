//! User Model and Database Operations
//!
//! The `password` column holds a bcrypt hash, never plaintext. `User` does
//! not implement `Serialize` on purpose: the only user shape that crosses
//! the wire is `UserResponse`, which omits the password entirely.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// A user row. Kept out of API responses; see `UserResponse`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    /// Unique.
    pub username: String,
    /// Unique.
    pub email: String,
    /// bcrypt hash.
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Insert a new user and return the created row.
///
/// `password` must already be hashed by the caller. A concurrent duplicate
/// registration surfaces as a unique-violation database error.
pub async fn create_user(
    pool: &PgPool,
    full_name: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (full_name, username, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING id, full_name, username, email, password, created_at
        "#,
    )
    .bind(full_name)
    .bind(username)
    .bind(email)
    .bind(password)
    .fetch_one(pool)
    .await
}

pub async fn get_user_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, full_name, username, email, password, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, full_name, username, email, password, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, full_name, username, email, password, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
