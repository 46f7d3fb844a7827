//! Auth-related DTOs for registration, login, and session responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;
use crate::utils::datetime::format_datetime;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating an account.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password must be between 6 and 128 characters"
    ))]
    pub password: String,
    /// Optional role; absent means Fleet Manager.
    pub role: Option<String>,
}

/// Request body for logging in.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Missing required field: username"))]
    pub username: String,
    #[validate(length(min = 1, message = "Missing required field: password"))]
    pub password: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data (never exposes the password hash).
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: format_datetime(user.created_at.to_jiff()),
        }
    }
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret123".to_string(),
            role: None,
        }
    }

    fn first_message(errors: &validator::ValidationErrors, field: &str) -> String {
        errors.field_errors()[field][0]
            .message
            .as_ref()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_register_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_register_rejects_short_username() {
        let request = RegisterRequest {
            username: "ab".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "username"),
            "Username must be between 3 and 50 characters"
        );
    }

    #[test]
    fn test_register_rejects_overlong_username() {
        let request = RegisterRequest {
            username: "a".repeat(51),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_rejects_malformed_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(first_message(&errors, "email"), "Invalid email format");
    }

    #[test]
    fn test_register_rejects_empty_email() {
        let request = RegisterRequest {
            email: String::new(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let request = RegisterRequest {
            password: "abc".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "password"),
            "Password must be between 6 and 128 characters"
        );
    }

    #[test]
    fn test_register_rejects_overlong_password() {
        let request = RegisterRequest {
            password: "x".repeat(129),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_valid() {
        let request = LoginRequest {
            username: "admin".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
