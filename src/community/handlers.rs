//! Community Handlers
//!
//! Forum endpoints. Reads are public; writes require a session, whose user
//! id becomes the record's owner. The like endpoint is deliberately open
//! and non-idempotent: repeated calls keep incrementing (public counter,
//! as in the original design).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::community::db;
use crate::community::db::{Comment, InsertComment, InsertPost, Post};
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::middleware::json::ApiJson;
use crate::server::state::AppState;

fn post_not_found() -> ApiError {
    ApiError::NotFound("Publicación no encontrada".to_string())
}

pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    Ok(Json(db::get_posts(&state.pool).await?))
}

pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(body): ApiJson<InsertPost>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    body.validate()?;

    let post = db::create_post(&state.pool, &body, user.id).await?;
    tracing::info!("post {} created by user {}", post.id, user.id);

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Post>, ApiError> {
    let post = db::increment_post_likes(&state.pool, id)
        .await?
        .ok_or_else(post_not_found)?;
    Ok(Json(post))
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    Ok(Json(db::get_comments_by_post(&state.pool, post_id).await?))
}

pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(post_id): Path<i32>,
    ApiJson(body): ApiJson<InsertComment>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    body.validate()?;

    // Commenting on a missing post is a 404, not a foreign-key 500.
    db::get_post(&state.pool, post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let comment = db::create_comment(&state.pool, &body, user.id, post_id).await?;
    tracing::info!("comment {} on post {} by user {}", comment.id, post_id, user.id);

    Ok((StatusCode::CREATED, Json(comment)))
}
