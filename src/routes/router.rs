//! Router Configuration
//!
//! Assembles the final router: API routes, request tracing and a JSON 404
//! fallback for unknown paths.

use axum::{http::StatusCode, Json, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let router = configure_api_routes(Router::new());

    router
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Ruta no encontrada" })),
            )
        })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
