//! Catalog Handlers
//!
//! Public, side-effect-free read endpoints for countries, resource
//! categories and resources. Missing single-resource lookups return 404
//! with a descriptive message.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::db;
use crate::catalog::db::{Country, Resource, ResourceCategory};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Optional filters for `GET /api/resources`. When both are supplied,
/// `countryId` wins, matching the original API's behavior.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilter {
    pub country_id: Option<i32>,
    pub category_id: Option<i32>,
}

pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Country>>, ApiError> {
    Ok(Json(db::get_countries(&state.pool).await?))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Country>, ApiError> {
    let country = db::get_country(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("País no encontrado".to_string()))?;
    Ok(Json(country))
}

pub async fn list_resource_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceCategory>>, ApiError> {
    Ok(Json(db::get_resource_categories(&state.pool).await?))
}

pub async fn list_resources(
    State(state): State<AppState>,
    Query(filter): Query<ResourceFilter>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let resources = if let Some(country_id) = filter.country_id {
        db::get_resources_by_country(&state.pool, country_id).await?
    } else if let Some(category_id) = filter.category_id {
        db::get_resources_by_category(&state.pool, category_id).await?
    } else {
        db::get_resources(&state.pool).await?
    };
    Ok(Json(resources))
}

pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Resource>, ApiError> {
    let resource = db::get_resource(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Recurso no encontrado".to_string()))?;
    Ok(Json(resource))
}
