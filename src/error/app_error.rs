use thiserror::Error;

use crate::error::DatabaseErrorConverter;

/// Application-wide error type covering every failure the handlers surface.
///
/// Domain failures (missing rows, duplicate keys, bad input) carry structured
/// fields so the HTTP layer can produce consistent JSON error bodies;
/// infrastructure failures wrap their source for logging.
#[derive(Error, Debug)]
pub enum AppError {
    /// Target or referenced entity is absent
    #[error("{entity} not found: {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Unique constraint violation (license number, plate number, username, email)
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Missing/empty required field or malformed field value
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Malformed request body or parameters
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// No valid session
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Valid session but insufficient role
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Convenience constructor for the "lookup-or-NotFound" repository contract.
    pub fn not_found(entity: &str, id: i32) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::Forbidden {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::from(error),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let (field, reason) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, field_errors)| {
                let reason = field_errors
                    .first()
                    .and_then(|e| e.message.clone())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), reason)
            })
            .unwrap_or_else(|| ("body".to_string(), "validation failed".to_string()));

        AppError::Validation { field, reason }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
