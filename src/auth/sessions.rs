//! Session Management
//!
//! Sessions are server-side rows keyed by an opaque UUID carried in a
//! signed, HTTP-only cookie. Persisting them in PostgreSQL means a server
//! restart does not log every user out.
//!
//! # Cookie Attributes
//!
//! - `HttpOnly` - never readable by client script
//! - `SameSite=Lax`, `Path=/`
//! - 30-day max age, matching the session row's `expires_at`
//! - `Secure` when running in production

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "migra.sid";

/// Session lifetime: 30 days.
pub const SESSION_TTL_DAYS: i64 = 30;

/// A server-side session row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Create a session for a user, valid for 30 days.
pub async fn create_session(pool: &PgPool, user_id: i32) -> Result<Session, sqlx::Error> {
    let id = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::days(SESSION_TTL_DAYS);

    sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (id, user_id, expires_at)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, expires_at, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

/// Look up a live session. Expired sessions are treated as absent.
pub async fn get_session(pool: &PgPool, id: Uuid) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, expires_at, created_at
        FROM sessions
        WHERE id = $1 AND expires_at > now()
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Destroy a session (logout). Deleting a missing session is not an error.
pub async fn delete_session(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove expired session rows. Run periodically from a background task.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Build the session cookie carrying an opaque session id.
///
/// The jar signs the value with the key derived from `SESSION_SECRET`;
/// a tampered cookie fails signature verification and reads as absent.
pub fn session_cookie(session_id: Uuid, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::days(SESSION_TTL_DAYS))
        .build()
}

/// Build the removal cookie used on logout. Attributes must match the
/// original cookie for browsers to drop it.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id, false);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(30)));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        let cookie = session_cookie(Uuid::new_v4(), true);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_clears_value() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_session_expiry_check() {
        let live = Session {
            id: Uuid::new_v4(),
            user_id: 1,
            expires_at: Utc::now() + Duration::days(1),
            created_at: Utc::now(),
        };
        assert!(!live.is_expired());

        let expired = Session {
            expires_at: Utc::now() - Duration::seconds(1),
            ..live
        };
        assert!(expired.is_expired());
    }
}
