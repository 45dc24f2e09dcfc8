//! Logout Handler
//!
//! `POST /api/logout`
//!
//! Deletes the server-side session row and clears the cookie. Logging out
//! without a live session is not an error; the response is 200 either way
//! so clients can always reset to the anonymous state.

use axum::{extract::State, Json};
use axum_extra::extract::SignedCookieJar;
use uuid::Uuid;

use crate::auth::sessions::{delete_session, removal_cookie, SESSION_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Json<serde_json::Value>), ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(session_id) = Uuid::parse_str(cookie.value()) {
            delete_session(&state.pool, session_id).await?;
            tracing::info!("session {} destroyed", session_id);
        }
    }

    let jar = jar.remove(removal_cookie());

    Ok((
        jar,
        Json(serde_json::json!({ "message": "Sesión cerrada correctamente" })),
    ))
}
