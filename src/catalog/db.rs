//! Catalog Storage
//!
//! Countries, resource categories and resources. These rows are the
//! editorial content of the platform: created by the seeder or by fixture
//! code, read by everyone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub flag_url: String,
    pub image_url: String,
    pub description: String,
}

/// Client-writable fields of a country.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertCountry {
    pub name: String,
    pub flag_url: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCategory {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResourceCategory {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Rich text body of the guide article.
    pub content: String,
    pub category_id: i32,
    pub country_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResource {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category_id: i32,
    pub country_id: i32,
}

// Countries -----------------------------------------------------------------

pub async fn get_countries(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
    sqlx::query_as::<_, Country>(
        "SELECT id, name, flag_url, image_url, description FROM countries",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_country(pool: &PgPool, id: i32) -> Result<Option<Country>, sqlx::Error> {
    sqlx::query_as::<_, Country>(
        "SELECT id, name, flag_url, image_url, description FROM countries WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_country(
    pool: &PgPool,
    country: &InsertCountry,
) -> Result<Country, sqlx::Error> {
    sqlx::query_as::<_, Country>(
        r#"
        INSERT INTO countries (name, flag_url, image_url, description)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, flag_url, image_url, description
        "#,
    )
    .bind(&country.name)
    .bind(&country.flag_url)
    .bind(&country.image_url)
    .bind(&country.description)
    .fetch_one(pool)
    .await
}

// Resource categories --------------------------------------------------------

pub async fn get_resource_categories(pool: &PgPool) -> Result<Vec<ResourceCategory>, sqlx::Error> {
    sqlx::query_as::<_, ResourceCategory>(
        "SELECT id, name, icon, description FROM resource_categories",
    )
    .fetch_all(pool)
    .await
}

pub async fn create_resource_category(
    pool: &PgPool,
    category: &InsertResourceCategory,
) -> Result<ResourceCategory, sqlx::Error> {
    sqlx::query_as::<_, ResourceCategory>(
        r#"
        INSERT INTO resource_categories (name, icon, description)
        VALUES ($1, $2, $3)
        RETURNING id, name, icon, description
        "#,
    )
    .bind(&category.name)
    .bind(&category.icon)
    .bind(&category.description)
    .fetch_one(pool)
    .await
}

// Resources -------------------------------------------------------------------

const RESOURCE_COLUMNS: &str =
    "id, title, description, content, category_id, country_id, created_at, updated_at";

pub async fn get_resources(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
    sqlx::query_as::<_, Resource>(&format!("SELECT {RESOURCE_COLUMNS} FROM resources"))
        .fetch_all(pool)
        .await
}

pub async fn get_resources_by_country(
    pool: &PgPool,
    country_id: i32,
) -> Result<Vec<Resource>, sqlx::Error> {
    sqlx::query_as::<_, Resource>(&format!(
        "SELECT {RESOURCE_COLUMNS} FROM resources WHERE country_id = $1"
    ))
    .bind(country_id)
    .fetch_all(pool)
    .await
}

pub async fn get_resources_by_category(
    pool: &PgPool,
    category_id: i32,
) -> Result<Vec<Resource>, sqlx::Error> {
    sqlx::query_as::<_, Resource>(&format!(
        "SELECT {RESOURCE_COLUMNS} FROM resources WHERE category_id = $1"
    ))
    .bind(category_id)
    .fetch_all(pool)
    .await
}

pub async fn get_resource(pool: &PgPool, id: i32) -> Result<Option<Resource>, sqlx::Error> {
    sqlx::query_as::<_, Resource>(&format!(
        "SELECT {RESOURCE_COLUMNS} FROM resources WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_resource(
    pool: &PgPool,
    resource: &InsertResource,
) -> Result<Resource, sqlx::Error> {
    sqlx::query_as::<_, Resource>(&format!(
        r#"
        INSERT INTO resources (title, description, content, category_id, country_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {RESOURCE_COLUMNS}
        "#
    ))
    .bind(&resource.title)
    .bind(&resource.description)
    .bind(&resource.content)
    .bind(resource.category_id)
    .bind(resource.country_id)
    .fetch_one(pool)
    .await
}
