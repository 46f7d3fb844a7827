use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::{AppError, ConstraintParser};

/// Converts Diesel database errors into structured AppError variants.
///
/// Unique violations become Duplicate (409), broken references and null
/// violations become Validation (400), anything else keeps its source for
/// the logs and surfaces as a generic database failure.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let message = info.message();
        let constraint_name = info.constraint_name();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                if let Some((entity, field, value)) =
                    ConstraintParser::parse_unique_violation(message, constraint_name)
                {
                    AppError::Duplicate {
                        entity,
                        field,
                        value,
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Unique constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_not_null_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Not null constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::ForeignKeyViolation => {
                if let Some((entity, field, referenced_value)) =
                    ConstraintParser::parse_foreign_key_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!(
                            "Invalid reference to {} with value '{}'",
                            entity, referenced_value
                        ),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Foreign key constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            DatabaseErrorKind::CheckViolation => {
                if let Some((entity, field)) =
                    ConstraintParser::parse_check_violation(message, constraint_name)
                {
                    AppError::Validation {
                        field,
                        reason: format!("Check constraint failed for {} field", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Check constraint violation: {}",
                            message
                        )),
                    }
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            None
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            None
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    #[test]
    fn test_convert_not_found_error() {
        let error = DieselError::NotFound;
        let result = DatabaseErrorConverter::convert_diesel_error(error, "find driver");

        match result {
            AppError::NotFound { entity, field, value } => {
                assert_eq!(entity, "resource");
                assert_eq!(field, "id");
                assert_eq!(value, "unknown");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_convert_duplicate_license_number() {
        let info = MockDatabaseErrorInfo {
            message: "duplicate key value violates unique constraint \"drivers_license_number_key\"\nDETAIL: Key (license_number)=(DL-1234) already exists.".to_string(),
            constraint_name: Some("drivers_license_number_key".to_string()),
        };

        let error = DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(info));
        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert driver");

        match result {
            AppError::Duplicate { entity, field, value } => {
                assert_eq!(entity, "drivers");
                assert_eq!(field, "license_number");
                assert_eq!(value, "DL-1234");
            }
            _ => panic!("Expected Duplicate error, got: {:?}", result),
        }
    }

    #[test]
    fn test_convert_assignment_fk_violation() {
        let info = MockDatabaseErrorInfo {
            message: "insert or update on table \"assignments\" violates foreign key constraint \"assignments_truck_id_fkey\"\nDETAIL: Key (truck_id)=(999) is not present in table \"trucks\".".to_string(),
            constraint_name: Some("assignments_truck_id_fkey".to_string()),
        };

        let error =
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, Box::new(info));
        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert assignment");

        match result {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "truck_id");
                assert!(reason.contains("Invalid reference"));
                assert!(reason.contains("999"));
            }
            _ => panic!("Expected Validation error, got: {:?}", result),
        }
    }

    #[test]
    fn test_convert_not_null_violation() {
        let info = MockDatabaseErrorInfo {
            message: "null value in column \"plate_number\" of relation \"trucks\" violates not-null constraint".to_string(),
            constraint_name: None,
        };

        let error = DieselError::DatabaseError(DatabaseErrorKind::NotNullViolation, Box::new(info));
        let result = DatabaseErrorConverter::convert_diesel_error(error, "insert truck");

        match result {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "plate_number");
                assert!(reason.contains("required"));
            }
            _ => panic!("Expected Validation error, got: {:?}", result),
        }
    }
}
