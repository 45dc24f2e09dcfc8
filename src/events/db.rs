//! Event Storage
//!
//! Community events with a public attendee counter. Like post likes, the
//! counter is mutated only through an atomic SQL increment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub online: bool,
    pub date: DateTime<Utc>,
    /// Display time, free-form ("18:00 - 20:00").
    pub time: String,
    pub country_id: i32,
    pub attendees: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub online: bool,
    pub date: DateTime<Utc>,
    pub time: String,
    pub country_id: i32,
}

const EVENT_COLUMNS: &str =
    "id, title, description, location, online, date, time, country_id, attendees, created_at";

pub async fn get_events(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!("SELECT {EVENT_COLUMNS} FROM events"))
        .fetch_all(pool)
        .await
}

pub async fn get_events_by_country(
    pool: &PgPool,
    country_id: i32,
) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE country_id = $1"
    ))
    .bind(country_id)
    .fetch_all(pool)
    .await
}

pub async fn create_event(pool: &PgPool, event: &InsertEvent) -> Result<Event, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        r#"
        INSERT INTO events (title, description, location, online, date, time, country_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {EVENT_COLUMNS}
        "#
    ))
    .bind(&event.title)
    .bind(&event.description)
    .bind(&event.location)
    .bind(event.online)
    .bind(event.date)
    .bind(&event.time)
    .bind(event.country_id)
    .fetch_one(pool)
    .await
}

/// Atomically increment an event's attendee counter; `None` if the event
/// does not exist.
pub async fn increment_event_attendees(
    pool: &PgPool,
    id: i32,
) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(&format!(
        r#"
        UPDATE events
        SET attendees = attendees + 1
        WHERE id = $1
        RETURNING {EVENT_COLUMNS}
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}
