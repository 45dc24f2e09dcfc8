//! Support Storage
//!
//! Emergency contacts per country and messages from the public contact
//! form. Contact messages are write-once from the API's point of view;
//! `is_processed` belongs to a future administrative process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{ApiError, ValidationErrors};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub description: String,
    pub category: String,
    pub country_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertEmergencyContact {
    pub name: String,
    pub phone: String,
    pub description: String,
    pub category: String,
    pub country_id: i32,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_processed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InsertContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl InsertContactMessage {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "El nombre es obligatorio");
        }
        if !self.email.contains('@') {
            errors.add("email", "Ingresa un correo electrónico válido");
        }
        if self.subject.trim().is_empty() {
            errors.add("subject", "El asunto es obligatorio");
        }
        if self.message.trim().is_empty() {
            errors.add("message", "El mensaje es obligatorio");
        }
        errors.into_result()
    }
}

pub async fn get_emergency_contacts_by_country(
    pool: &PgPool,
    country_id: i32,
) -> Result<Vec<EmergencyContact>, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>(
        r#"
        SELECT id, name, phone, description, category, country_id
        FROM emergency_contacts
        WHERE country_id = $1
        "#,
    )
    .bind(country_id)
    .fetch_all(pool)
    .await
}

pub async fn create_emergency_contact(
    pool: &PgPool,
    contact: &InsertEmergencyContact,
) -> Result<EmergencyContact, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>(
        r#"
        INSERT INTO emergency_contacts (name, phone, description, category, country_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, phone, description, category, country_id
        "#,
    )
    .bind(&contact.name)
    .bind(&contact.phone)
    .bind(&contact.description)
    .bind(&contact.category)
    .bind(contact.country_id)
    .fetch_one(pool)
    .await
}

pub async fn create_contact_message(
    pool: &PgPool,
    message: &InsertContactMessage,
) -> Result<ContactMessage, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (name, email, subject, message)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, email, subject, message, is_processed, created_at
        "#,
    )
    .bind(&message.name)
    .bind(&message.email)
    .bind(&message.subject)
    .bind(&message.message)
    .fetch_one(pool)
    .await
}
