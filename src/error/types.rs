//! API Error Types
//!
//! This module defines the error taxonomy used by all route handlers.
//!
//! # Error Categories
//!
//! - `Validation` - malformed request fields, reported per field (400)
//! - `NotFound` - a referenced entity id does not exist (404)
//! - `Unauthorized` - a session-gated operation without a session (401)
//! - `Conflict` - a uniqueness violation on registration (409)
//! - `InvalidCredentials` - login mismatch, deliberately generic (401)
//! - `Database` / `Hash` - unexpected internals, surfaced as a generic 500

use axum::http::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation error map.
///
/// Validation failures are reported per field, not as one opaque message,
/// so clients can surface actionable errors next to each form input.
#[derive(Debug, Default, Serialize)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. Only the first error per field is kept.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Finish a validation pass: `Ok(())` when no errors were recorded.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self))
        }
    }
}

/// Errors a route handler can produce.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request fields.
    #[error("Datos inválidos")]
    Validation(ValidationErrors),

    /// Referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Session-gated operation attempted without a session.
    #[error("{0}")]
    Unauthorized(String),

    /// Duplicate username/email on registration.
    #[error("{message}")]
    Conflict {
        /// Which field conflicted ("username" or "email").
        field: &'static str,
        message: String,
    },

    /// Login email/password mismatch. The message never reveals whether
    /// the email exists.
    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    /// Storage failure. Unique violations are translated to a conflict
    /// response; anything else becomes a generic 500.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure.
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Database(err) => {
                if is_unique_violation(err) {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message. Internal errors are replaced with a generic
    /// message so query text and stack traces never reach the client.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(_) => "Datos inválidos".to_string(),
            Self::NotFound(message) => message.clone(),
            Self::Unauthorized(message) => message.clone(),
            Self::Conflict { message, .. } => message.clone(),
            Self::InvalidCredentials => "Credenciales incorrectas".to_string(),
            Self::Database(err) => match unique_violation_message(err) {
                Some(message) => message,
                None => "Error interno del servidor".to_string(),
            },
            Self::Hash(_) => "Error interno del servidor".to_string(),
        }
    }
}

/// Whether a sqlx error is a uniqueness constraint violation.
///
/// Pre-insert existence checks catch most duplicates, but two concurrent
/// registrations can both pass them; the database constraint is the final
/// arbiter and must still map to a conflict response, not a 500.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Conflict message for a unique violation, derived from the constraint name.
fn unique_violation_message(err: &sqlx::Error) -> Option<String> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if !db_err.is_unique_violation() {
        return None;
    }
    let message = match db_err.constraint() {
        Some("users_username_key") => "El nombre de usuario ya está en uso",
        Some("users_email_key") => "El correo electrónico ya está registrado",
        _ => "El valor ya está en uso",
    };
    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_accumulate_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Ingresa un correo electrónico válido");
        errors.add("password", "La contraseña debe tener al menos 6 caracteres");
        // second error on the same field is ignored
        errors.add("email", "otro mensaje");

        assert!(!errors.is_empty());
        assert_eq!(errors.get("email"), Some("Ingresa un correo electrónico válido"));
        assert_eq!(
            errors.get("password"),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
    }

    #[test]
    fn test_into_result_empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_into_result_with_errors_is_validation() {
        let mut errors = ValidationErrors::new();
        errors.add("content", "El contenido es obligatorio");
        match errors.into_result() {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("content"), Some("El contenido es obligatorio"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "requerido");
        assert_eq!(
            ApiError::Validation(errors).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("País no encontrado".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unauthorized("Debes iniciar sesión".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Conflict {
                field: "email",
                message: "El correo electrónico ya está registrado".into()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_errors_never_leak_details() {
        let err = ApiError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.public_message(), "Error interno del servidor");
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        assert_eq!(
            ApiError::InvalidCredentials.public_message(),
            "Credenciales incorrectas"
        );
    }

    #[test]
    fn test_validation_errors_serialize_as_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add("subject", "El asunto es obligatorio");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["subject"], "El asunto es obligatorio");
    }
}
