//! Error handler for converting AppError to HTTP responses.
//!
//! Implements `IntoResponse` for `AppError` so handlers can return
//! `Result<_, AppError>` and still produce a consistent JSON error body.
//! Infrastructure failures are sanitized before leaving the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::dto::{ErrorResponse, duplicate_message, not_found_message};
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let code = error_to_code(&self);

        let message = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => not_found_message(entity, field, value),
            AppError::Duplicate { field, .. } => duplicate_message(field),
            AppError::Validation { reason, .. } => reason.clone(),
            AppError::BadRequest { message }
            | AppError::Unauthorized { message }
            | AppError::Forbidden { message } => message.clone(),
            AppError::Database { source, .. } => {
                tracing::error!(error = %source, "Database operation failed");
                "A database error occurred".to_string()
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "Configuration error");
                "A configuration error occurred".to_string()
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Connection pool error");
                "Database connection unavailable".to_string()
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
                "An internal error occurred".to_string()
            }
        };

        (status, Json(ErrorResponse::new(code, &message))).into_response()
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps an AppError variant to its stable error code string.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Duplicate { .. } => "DUPLICATE_ENTRY",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::Unauthorized { .. } => "UNAUTHORIZED",
        AppError::Forbidden { .. } => "FORBIDDEN",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } => "CONFIGURATION_ERROR",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::not_found("driver", 42);
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
        assert_eq!(error_to_code(&error), "NOT_FOUND");
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let error = AppError::Duplicate {
            entity: "driver".to_string(),
            field: "license_number".to_string(),
            value: "DL-100".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
        assert_eq!(error_to_code(&error), "DUPLICATE_ENTRY");
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = AppError::validation("start_date", "invalid date format");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_errors() {
        assert_eq!(
            error_to_status_code(&AppError::unauthorized("no session")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            error_to_status_code(&AppError::forbidden("admin only")),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_pool_error_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_response_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("stack trace with sensitive detail"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_response_body_carries_mapped_code() {
        let error = AppError::Duplicate {
            entity: "driver".to_string(),
            field: "license_number".to_string(),
            value: "DL-100".to_string(),
        };
        let expected_code = error_to_code(&error);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, expected_code);
        assert_eq!(body.error, "License number already exists");
    }
}
