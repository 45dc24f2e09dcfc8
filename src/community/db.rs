//! Community Storage
//!
//! Forum posts and their comments. `likes` is only ever changed through
//! `increment_post_likes`, an atomic SQL increment, so concurrent likes
//! never lose updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{ApiError, ValidationErrors};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub origin_country: Option<String>,
    pub destination_country: Option<String>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

/// Client-writable fields of a post. The owner id comes from the session,
/// never from the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPost {
    pub content: String,
    #[serde(default)]
    pub origin_country: Option<String>,
    #[serde(default)]
    pub destination_country: Option<String>,
}

impl InsertPost {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = ValidationErrors::new();
        if self.content.trim().is_empty() {
            errors.add("content", "El contenido es obligatorio");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/posts/{postId}/comments`; post and owner ids come
/// from the path and session.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertComment {
    pub content: String,
}

impl InsertComment {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = ValidationErrors::new();
        if self.content.trim().is_empty() {
            errors.add("content", "El contenido es obligatorio");
        }
        errors.into_result()
    }
}

const POST_COLUMNS: &str =
    "id, content, user_id, origin_country, destination_country, likes, created_at";

pub async fn get_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts"))
        .fetch_all(pool)
        .await
}

pub async fn get_post(pool: &PgPool, id: i32) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_post(
    pool: &PgPool,
    post: &InsertPost,
    user_id: i32,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        INSERT INTO posts (content, user_id, origin_country, destination_country)
        VALUES ($1, $2, $3, $4)
        RETURNING {POST_COLUMNS}
        "#
    ))
    .bind(&post.content)
    .bind(user_id)
    .bind(&post.origin_country)
    .bind(&post.destination_country)
    .fetch_one(pool)
    .await
}

/// Atomically increment a post's like counter and return the updated row,
/// or `None` if the post does not exist.
pub async fn increment_post_likes(pool: &PgPool, id: i32) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(&format!(
        r#"
        UPDATE posts
        SET likes = likes + 1
        WHERE id = $1
        RETURNING {POST_COLUMNS}
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_comments_by_post(
    pool: &PgPool,
    post_id: i32,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, content, user_id, post_id, created_at FROM comments WHERE post_id = $1",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

pub async fn create_comment(
    pool: &PgPool,
    comment: &InsertComment,
    user_id: i32,
    post_id: i32,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, user_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, content, user_id, post_id, created_at
        "#,
    )
    .bind(&comment.content)
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_post_requires_content() {
        let post = InsertPost {
            content: "   ".to_string(),
            origin_country: None,
            destination_country: None,
        };
        assert!(post.validate().is_err());

        let post = InsertPost {
            content: "Hola".to_string(),
            origin_country: Some("Venezuela".to_string()),
            destination_country: Some("España".to_string()),
        };
        assert!(post.validate().is_ok());
    }

    #[test]
    fn test_insert_post_countries_are_optional() {
        let post: InsertPost = serde_json::from_str(r#"{"content":"Hola"}"#).unwrap();
        assert_eq!(post.origin_country, None);
        assert_eq!(post.destination_country, None);
    }

    #[test]
    fn test_insert_comment_requires_content() {
        assert!(InsertComment { content: "".to_string() }.validate().is_err());
        assert!(InsertComment { content: "De acuerdo".to_string() }.validate().is_ok());
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post {
            id: 1,
            content: "Hola".to_string(),
            user_id: 4,
            origin_country: Some("Colombia".to_string()),
            destination_country: None,
            likes: 0,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 4);
        assert_eq!(json["originCountry"], "Colombia");
        assert_eq!(json["likes"], 0);
        assert!(json["destinationCountry"].is_null());
    }
}
