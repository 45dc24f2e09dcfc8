//! Login Handler
//!
//! `POST /api/login`
//!
//! Looks the user up by email and verifies the password with bcrypt
//! (constant-time comparison). A missing user and a wrong password both
//! produce the same generic 401 so the endpoint cannot be used to probe
//! which emails are registered.

use axum::{extract::State, Json};
use axum_extra::extract::SignedCookieJar;
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, UserResponse};
use crate::auth::sessions::{create_session, session_cookie};
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::middleware::json::ApiJson;
use crate::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<(SignedCookieJar, Json<UserResponse>), ApiError> {
    tracing::info!("login attempt for {}", request.email);

    let user = get_user_by_email(&state.pool, &request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify(&request.password, &user.password)? {
        tracing::warn!("invalid password for {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let session = create_session(&state.pool, user.id).await?;
    let jar = jar.add(session_cookie(session.id, state.secure_cookies));

    tracing::info!("user logged in: {} (id {})", user.username, user.id);

    Ok((jar, Json(UserResponse::from(user))))
}
