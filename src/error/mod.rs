//! API Error Module
//!
//! Error types shared by every route handler, plus their conversion to
//! HTTP responses.
//!
//! - **`types`** - Error type definitions and the per-field validation map
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Handlers return `Result<_, ApiError>`; expected failures (validation,
//! missing rows, auth) map to 4xx responses, everything else funnels into a
//! generic 500 that never leaks internals to the client.

pub mod conversion;
pub mod types;

pub use types::{ApiError, ValidationErrors};
