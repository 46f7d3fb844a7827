//! Error response body shared by every endpoint.

use serde::{Deserialize, Serialize};

/// JSON error body: a human-readable message plus a stable machine code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Stable error code for programmatic handling
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
        }
    }
}

/// "Driver not found" style message for a missing entity.
pub fn not_found_message(entity: &str, field: &str, value: &str) -> String {
    if field == "id" {
        format!("{} not found", capitalize(entity))
    } else {
        format!("{} with {} '{}' not found", capitalize(entity), field, value)
    }
}

/// "License number already exists" style message for a unique-key clash.
pub fn duplicate_message(field: &str) -> String {
    format!("{} already exists", capitalize(&field.replace('_', " ")))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_shape() {
        assert_eq!(
            duplicate_message("license_number"),
            "License number already exists"
        );
    }

    #[test]
    fn test_not_found_by_id() {
        assert_eq!(not_found_message("driver", "id", "42"), "Driver not found");
    }

    #[test]
    fn test_not_found_by_other_field() {
        assert_eq!(
            not_found_message("user", "username", "ghost"),
            "User with username 'ghost' not found"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ErrorResponse::new(
            "VALIDATION_ERROR",
            "Missing required field: name",
        ))
        .unwrap();
        assert_eq!(json["error"], "Missing required field: name");
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
