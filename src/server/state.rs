//! Application State
//!
//! `AppState` is the central state container: the PostgreSQL pool (the
//! only shared resource between requests) and the cookie signing key.
//! `FromRef` impls let extractors pull out just the part they need.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; session store and business data share it.
    pub pool: PgPool,
    /// Key used by `SignedCookieJar` to sign and verify the session cookie.
    pub cookie_key: Key,
    /// Mark the session cookie `Secure` (production).
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(pool: PgPool, cookie_key: Key, secure_cookies: bool) -> Self {
        Self {
            pool,
            cookie_key,
            secure_cookies,
        }
    }
}

/// Lets `SignedCookieJar` find its signing key in the router state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
