//! Registration Handler
//!
//! `POST /api/register`
//!
//! 1. Validate fields (per-field error map)
//! 2. Check username/email uniqueness
//! 3. Hash the password with bcrypt
//! 4. Create the user and a 30-day session
//! 5. Set the session cookie and return the user without its password
//!
//! Two concurrent registrations can both pass the existence checks; the
//! unique constraints on `users` then reject one insert, which the error
//! conversion maps to a conflict response rather than a 500.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::SignedCookieJar;
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::sessions::{create_session, session_cookie};
use crate::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::error::{ApiError, ValidationErrors};
use crate::middleware::json::ApiJson;
use crate::server::state::AppState;

/// Username rule: 3-30 characters, starts with a letter, rest alphanumeric
/// or underscore.
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn validate(request: &RegisterRequest) -> Result<(), ApiError> {
    let mut errors = ValidationErrors::new();

    if request.full_name.trim().is_empty() {
        errors.add("fullName", "El nombre completo es obligatorio");
    }
    if !is_valid_username(&request.username) {
        errors.add(
            "username",
            "El nombre de usuario debe tener entre 3 y 30 caracteres y empezar con una letra",
        );
    }
    if !request.email.contains('@') {
        errors.add("email", "Ingresa un correo electrónico válido");
    }
    if request.password.chars().count() < 6 {
        errors.add("password", "La contraseña debe tener al menos 6 caracteres");
    }

    errors.into_result()
}

pub async fn register(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, SignedCookieJar, Json<UserResponse>), ApiError> {
    tracing::info!("registration attempt for username {}", request.username);

    validate(&request)?;

    if get_user_by_username(&state.pool, &request.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict {
            field: "username",
            message: "El nombre de usuario ya está en uso".to_string(),
        });
    }
    if get_user_by_email(&state.pool, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict {
            field: "email",
            message: "El correo electrónico ya está registrado".to_string(),
        });
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &state.pool,
        request.full_name.trim(),
        &request.username,
        &request.email,
        &password_hash,
    )
    .await?;

    let session = create_session(&state.pool, user.id).await?;
    let jar = jar.add(session_cookie(session.id, state.secure_cookies));

    tracing::info!("user registered: {} (id {})", user.username, user.id);

    Ok((StatusCode::CREATED, jar, Json(UserResponse::from(user))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: "Ana Pérez".to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&request("anap", "ana@example.com", "secret1")).is_ok());
    }

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("anap"));
        assert!(is_valid_username("ana_perez99"));
        assert!(!is_valid_username("an"));
        assert!(!is_valid_username("9ana"));
        assert!(!is_valid_username("_ana"));
        assert!(!is_valid_username("ana perez"));
        assert!(!is_valid_username(&"a".repeat(31)));
    }

    #[test]
    fn test_short_password_rejected_per_field() {
        let result = validate(&request("anap", "ana@example.com", "corta"));
        match result {
            Err(ApiError::Validation(errors)) => {
                assert!(errors.get("password").is_some());
                assert!(errors.get("email").is_none());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_six_character_password_accepted() {
        assert!(validate(&request("anap", "ana@example.com", "secret")).is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result = validate(&request("anap", "not-an-email", "secret1"));
        match result {
            Err(ApiError::Validation(errors)) => {
                assert!(errors.get("email").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_invalid_fields_reported_together() {
        let mut bad = request("x", "bad", "123");
        bad.full_name = "  ".to_string();
        match validate(&bad) {
            Err(ApiError::Validation(errors)) => {
                assert!(errors.get("fullName").is_some());
                assert!(errors.get("username").is_some());
                assert!(errors.get("email").is_some());
                assert!(errors.get("password").is_some());
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
