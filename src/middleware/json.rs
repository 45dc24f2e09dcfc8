//! JSON Body Extractor
//!
//! `ApiJson<T>` wraps `axum::Json<T>` so a body that fails to deserialize
//! answers with the same per-field validation shape as the handlers' own
//! checks, instead of axum's plain-text 422. A missing required field is
//! reported under its own wire name; anything else (syntax error, wrong
//! content type) is reported under `body`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::{ApiError, ValidationErrors};

/// JSON request body with validation-style rejections.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(rejection_error(rejection)),
        }
    }
}

fn rejection_error(rejection: JsonRejection) -> ApiError {
    let text = rejection.body_text();
    let mut errors = ValidationErrors::new();
    match missing_field(&text) {
        Some(field) => errors.add(field, "Este campo es obligatorio"),
        None => errors.add("body", "El cuerpo de la solicitud no es válido"),
    }
    ApiError::Validation(errors)
}

/// Field name from serde's "missing field `name`" message, already in its
/// wire (camelCase) spelling.
fn missing_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("missing field `")?;
    let (field, _) = rest.split_once('`')?;
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};

    use crate::support::db::InsertContactMessage;

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_missing_field_name_extraction() {
        let message = "Failed to deserialize the JSON body into the target type: \
                       missing field `subject` at line 1 column 40";
        assert_eq!(missing_field(message), Some("subject"));
        assert_eq!(missing_field("expected value at line 1 column 1"), None);
    }

    #[tokio::test]
    async fn test_missing_field_is_reported_per_field() {
        let request = json_request(r#"{"name":"Ana","email":"ana@example.com"}"#);
        let result = ApiJson::<InsertContactMessage>::from_request(request, &()).await;
        match result {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("subject"), Some("Este campo es obligatorio"));
            }
            _ => panic!("expected a per-field validation error"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported_generically() {
        let request = json_request("{not json");
        let result = ApiJson::<InsertContactMessage>::from_request(request, &()).await;
        match result {
            Err(ApiError::Validation(errors)) => {
                assert!(errors.get("body").is_some());
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let request = json_request(
            r#"{"name":"Ana","email":"ana@example.com","subject":"Consulta","message":"Hola"}"#,
        );
        let result = ApiJson::<InsertContactMessage>::from_request(request, &()).await;
        assert!(result.is_ok());
    }
}
