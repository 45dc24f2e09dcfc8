//! Authentication Extractor
//!
//! `CurrentUser` resolves the signed session cookie to a full user record:
//! cookie → session row (expiry checked in SQL) → user row. Routes that
//! take a `CurrentUser` parameter reject anonymous requests with 401
//! before the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::Key;
use axum_extra::extract::SignedCookieJar;
use uuid::Uuid;

use crate::auth::sessions::{get_session, SESSION_COOKIE};
use crate::auth::users::{get_user_by_id, User};
use crate::error::ApiError;
use crate::server::state::AppState;

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Debes iniciar sesión".to_string())
}

/// The authenticated user behind the request's session cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar: SignedCookieJar<Key> =
            match SignedCookieJar::from_request_parts(parts, state).await {
                Ok(jar) => jar,
                Err(never) => match never {},
            };

        // A tampered cookie fails signature verification and reads as absent.
        let cookie = jar.get(SESSION_COOKIE).ok_or_else(unauthorized)?;

        let session_id = Uuid::parse_str(cookie.value()).map_err(|_| {
            tracing::warn!("malformed session id in cookie");
            unauthorized()
        })?;

        let session = get_session(&state.pool, session_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!("session {} absent or expired", session_id);
                unauthorized()
            })?;

        let user = get_user_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!("session {} references missing user {}", session_id, session.user_id);
                unauthorized()
            })?;

        Ok(CurrentUser(user))
    }
}
