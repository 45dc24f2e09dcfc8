//! Event Handlers
//!
//! Listing is public and optionally filtered by country. The attend
//! endpoint mirrors the like endpoint: open, non-idempotent, atomic.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::events::db;
use crate::events::db::Event;
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    pub country_id: Option<i32>,
}

pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = match filter.country_id {
        Some(country_id) => db::get_events_by_country(&state.pool, country_id).await?,
        None => db::get_events(&state.pool).await?,
    };
    Ok(Json(events))
}

pub async fn attend_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Event>, ApiError> {
    let event = db::increment_event_attendees(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Evento no encontrado".to_string()))?;
    Ok(Json(event))
}
