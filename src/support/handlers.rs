//! Support Handlers
//!
//! Emergency contact lookup and the public contact form. The contact
//! endpoint returns a generic confirmation instead of echoing the stored
//! record back.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::middleware::json::ApiJson;
use crate::server::state::AppState;
use crate::support::db;
use crate::support::db::{EmergencyContact, InsertContactMessage};

pub async fn list_emergency_contacts(
    State(state): State<AppState>,
    Path(country_id): Path<i32>,
) -> Result<Json<Vec<EmergencyContact>>, ApiError> {
    Ok(Json(
        db::get_emergency_contacts_by_country(&state.pool, country_id).await?,
    ))
}

pub async fn create_contact_message(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<InsertContactMessage>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    body.validate()?;

    db::create_contact_message(&state.pool, &body).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Mensaje enviado con éxito" })),
    ))
}
