//! Request and response types for the auth endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Body of `POST /api/register`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User shape returned to clients. The password hash is stripped here and
/// nowhere else serializes a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_omits_password() {
        let user = User {
            id: 7,
            full_name: "Ana Pérez".to_string(),
            username: "anap".to_string(),
            email: "ana@example.com".to_string(),
            password: "$2b$12$fakehash".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["fullName"], "Ana Pérez");
        assert_eq!(json["username"], "anap");
        assert_eq!(json["email"], "ana@example.com");
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("fakehash"));
    }

    #[test]
    fn test_register_request_accepts_camel_case() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"fullName":"Ana Pérez","username":"anap","email":"ana@example.com","password":"secret1"}"#,
        )
        .unwrap();
        assert_eq!(request.full_name, "Ana Pérez");
        assert_eq!(request.username, "anap");
    }
}
