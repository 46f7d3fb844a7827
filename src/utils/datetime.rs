//! Wire format for timestamps.
//!
//! All timestamps cross the API boundary as text in a single fixed format;
//! anything else is rejected with a validation error.

use jiff::civil;

use crate::error::{AppError, AppResult};

/// The only timestamp format accepted and produced by the API.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a wire timestamp like "2024-01-15 10:30:00".
///
/// `field` names the offending request field in the error.
pub fn parse_datetime(field: &str, value: &str) -> AppResult<civil::DateTime> {
    civil::DateTime::strptime(DATETIME_FORMAT, value).map_err(|_| AppError::Validation {
        field: field.to_string(),
        reason: format!("invalid date format, expected {}", "YYYY-MM-DD HH:MM:SS"),
    })
}

/// Formats a civil datetime for the wire.
pub fn format_datetime(value: civil::DateTime) -> String {
    value.strftime(DATETIME_FORMAT).to_string()
}
