//! Server Configuration
//!
//! Configuration comes from environment variables:
//!
//! - `DATABASE_URL` (required) - the server refuses to start without it
//! - `SESSION_SECRET` - key material for signing the session cookie;
//!   falls back to an insecure development default, loudly
//! - `APP_ENV` - `production` enables the `Secure` cookie attribute
//! - `SERVER_PORT` - listen port, default 3000

use axum_extra::extract::cookie::Key;
use sqlx::PgPool;

/// Default secret for local development only. Kept deliberately: the
/// original behaved the same way, and the fallback is logged at startup.
const DEV_SESSION_SECRET: &str = "migraguia-dev-secret-change-in-production";

/// Connect to PostgreSQL and run migrations.
///
/// `DATABASE_URL` is required; a missing variable or failed connection is
/// fatal, unlike optional services that could degrade gracefully.
pub async fn load_database() -> Result<PgPool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        tracing::error!("DATABASE_URL is not set; the server cannot start without a database");
        sqlx::Error::Configuration("DATABASE_URL is not set".into())
    })?;

    tracing::info!("connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Read `SESSION_SECRET`, falling back to the insecure dev default when it
/// is unset or too short to derive a signing key from.
pub fn session_secret() -> String {
    match std::env::var("SESSION_SECRET") {
        Ok(secret) if secret.len() >= 32 => secret,
        Ok(_) => {
            tracing::warn!(
                "SESSION_SECRET is shorter than 32 bytes; using the insecure development default"
            );
            DEV_SESSION_SECRET.to_string()
        }
        Err(_) => {
            tracing::warn!("SESSION_SECRET not set; using the insecure development default");
            DEV_SESSION_SECRET.to_string()
        }
    }
}

/// Cookie signing key derived from the session secret.
pub fn cookie_key() -> Key {
    Key::derive_from(session_secret().as_bytes())
}

/// Whether the server runs in production (controls the `Secure` cookie
/// attribute).
pub fn is_production() -> bool {
    std::env::var("APP_ENV").as_deref() == Ok("production")
}

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_secret_long_enough_for_key_derivation() {
        // Key::derive_from panics below 32 bytes of key material.
        assert!(DEV_SESSION_SECRET.len() >= 32);
        let _ = Key::derive_from(DEV_SESSION_SECRET.as_bytes());
    }
}
