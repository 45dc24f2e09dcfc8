//! MigraGuía API Server
//!
//! REST/JSON backend for a bilingual informational platform for migrants:
//! per-country migration guides, categorized resource articles, a community
//! forum with posts, comments and likes, community events, emergency
//! contacts and a public contact form.
//!
//! # Architecture
//!
//! - **`server`** - configuration, shared state (`AppState`), initialization
//! - **`routes`** - router assembly
//! - **`auth`** - users, persisted sessions, auth endpoints
//! - **`middleware`** - the `CurrentUser` session extractor
//! - **`catalog`** - countries, resource categories, resources
//! - **`community`** - posts, comments, like counters
//! - **`events`** - events and attend counters
//! - **`support`** - emergency contacts and contact messages
//! - **`error`** - `ApiError` taxonomy and HTTP conversion
//!
//! Each feature module owns its entity types and sqlx queries (`db.rs`) and
//! its HTTP handlers (`handlers.rs`). Nothing outside a `db` module issues
//! raw queries. All state lives in PostgreSQL; requests share only the
//! connection pool.

pub mod auth;
pub mod catalog;
pub mod community;
pub mod error;
pub mod events;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod support;
