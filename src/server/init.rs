//! Server Initialization
//!
//! Builds the application: connect to the database (fatal if missing),
//! run migrations, seed the editorial baseline, assemble the router and
//! start the expired-session sweeper.

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::{cookie_key, is_production, load_database};
use crate::server::seed::seed_database;
use crate::server::state::AppState;

/// Create the configured Axum application.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("initializing MigraGuía API server");

    let pool = load_database().await?;

    if let Err(e) = seed_database(&pool).await {
        // Seed data is a convenience, not a prerequisite for serving.
        tracing::warn!("database seeding failed: {:?}", e);
    }

    let state = AppState::new(pool, cookie_key(), is_production());

    spawn_session_sweeper(state.pool.clone());

    Ok(create_router(state))
}

/// Periodically remove expired session rows. Expired sessions are already
/// invisible to lookups; this only keeps the table from growing forever.
fn spawn_session_sweeper(pool: sqlx::PgPool) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(3600));
        loop {
            interval.tick().await;
            match crate::auth::sessions::purge_expired_sessions(&pool).await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!("purged {} expired sessions", purged),
                Err(e) => tracing::warn!("failed to purge expired sessions: {:?}", e),
            }
        }
    });
}
