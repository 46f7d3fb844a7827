use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs `validator` rules after deserialization.
///
/// Body deserialization failures become `BadRequest`; failed validation rules
/// become `Validation` errors, so both surface as JSON 400 responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest {
                message: rejection.body_text(),
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, message = "Missing required field: name"))]
        name: String,
        #[validate(length(min = 1, message = "Missing required field: license_number"))]
        license_number: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"name": "John", "license_number": "DL-100"}"#);
        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(body.name, "John");
        assert_eq!(body.license_number, "DL-100");
    }

    #[tokio::test]
    async fn test_empty_field_becomes_validation_error() {
        let request = json_request(r#"{"name": "John", "license_number": ""}"#);
        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();
        match error {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "license_number");
                assert_eq!(reason, "Missing required field: license_number");
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_becomes_bad_request() {
        let request = json_request(r#"{"name": "John"}"#);
        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();
        match error {
            AppError::BadRequest { message } => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_becomes_bad_request() {
        let request = json_request("{not json");
        let error = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::BadRequest { .. }));
    }
}
