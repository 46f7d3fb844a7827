use std::sync::OnceLock;

use regex::Regex;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from the database's
/// constraint violation text so that duplicate plate numbers, license numbers
/// and broken assignment references surface as domain errors instead of
/// opaque database failures.
pub struct ConstraintParser;

/// Compiled regex patterns for constraint parsing, cached for reuse
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" pattern in PostgreSQL messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // Matches table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation message.
    ///
    /// Returns (entity, field, value) when either the constraint name
    /// (e.g. "drivers_license_number_key") or the message detail can be
    /// decomposed.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "duplicate_value".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not null constraint violation message into (entity, field).
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Parses a foreign key constraint violation message into
    /// (entity, field, referenced_value).
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_foreign_key_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "invalid_reference".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a check constraint violation message into (entity, field).
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                return Some((entity, field));
            }
        }

        Self::extract_table_from_message(message).map(|entity| (entity, "unknown".to_string()))
    }

    /// Decomposes a Postgres-style constraint name like
    /// "drivers_license_number_key" into ("drivers", "license_number").
    ///
    /// Relies on single-word table names, which holds for this schema.
    pub fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let trimmed = constraint
            .strip_suffix("_fkey")
            .or_else(|| constraint.strip_suffix("_key"))
            .or_else(|| constraint.strip_suffix("_check"))
            .or_else(|| constraint.strip_suffix("_pkey"))?;

        let (entity, field) = trimmed.split_once('_')?;
        if entity.is_empty() || field.is_empty() {
            return None;
        }
        Some((entity.to_string(), field.to_string()))
    }

    /// Decomposes a foreign key constraint name like
    /// "assignments_driver_id_fkey" into ("assignments", "driver_id").
    pub fn parse_foreign_key_constraint_name(constraint: &str) -> Option<(String, String)> {
        let trimmed = constraint.strip_suffix("_fkey")?;
        let (entity, field) = trimmed.split_once('_')?;
        if entity.is_empty() || field.is_empty() {
            return None;
        }
        Some((entity.to_string(), field.to_string()))
    }

    /// Extracts the value from a "Key (field)=(value)" message detail.
    pub fn extract_value_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|caps| caps[2].to_string())
    }

    /// Extracts (field, value) from a "Key (field)=(value)" message detail.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
    }

    /// Extracts a quoted column name from the message.
    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .map(|caps| caps[1].to_string())
    }

    /// Extracts a quoted table name from the message.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .map(|caps| caps[1].to_string())
    }
}
