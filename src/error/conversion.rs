//! Error Conversion
//!
//! Converts `ApiError` into HTTP responses so handlers can return it
//! directly with `?`.
//!
//! # Response Format
//!
//! ```json
//! { "message": "Datos inválidos", "errors": { "email": "..." } }
//! ```
//!
//! The `errors` map is only present for validation failures. Internal
//! errors are logged server-side and replaced with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // The full error stays in the server log only.
            tracing::error!("unhandled error in request handler: {:?}", self);
        }

        let message = self.public_message();
        let body = match self {
            ApiError::Validation(errors) => serde_json::json!({
                "message": message,
                "errors": errors,
            }),
            _ => serde_json::json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}
