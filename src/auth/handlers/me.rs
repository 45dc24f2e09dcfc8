//! Current User Handler
//!
//! `GET /api/user`
//!
//! Resolves the session cookie back to a full user record with the
//! password stripped. Anonymous requests get a 401, which clients treat
//! as "no user" rather than an error.

use axum::Json;

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;

pub async fn current_user(
    CurrentUser(user): CurrentUser,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(UserResponse::from(user)))
}
