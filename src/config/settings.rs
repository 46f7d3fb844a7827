//! Configuration settings structures for fleetman
//!
//! Defines all configuration that can be loaded from TOML files and
//! environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "fleetman".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

fn default_session_ttl() -> i64 {
    86400 // 24 hours
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// Diesel database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to automatically run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Validates the database configuration for commands that need a database
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL cannot be empty",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Maximum connections must be greater than 0",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Minimum connections cannot exceed maximum connections",
            ));
        }

        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// Session Configuration
// ============================================================================

/// Server-side session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: i64,
}

impl SessionConfig {
    /// Validates the session configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_seconds <= 0 {
            return Err(ConfigError::validation(
                "session.ttl_seconds",
                "Session lifetime must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_session_ttl(),
        }
    }
}

// ============================================================================
// CORS Configuration
// ============================================================================

/// Cross-origin configuration for the single trusted frontend origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// The origin allowed to call the API with credentials
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use colored output when attached to a terminal
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl LoggerSettings {
    /// Convert LoggerSettings into the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format =
            self.format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::ValidationError {
                    field: "logger.format".to_string(),
                    message: e,
                })?;

        Ok(LoggerConfig {
            level: self.level,
            format,
            colored: self.colored,
        })
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root settings structure aggregating every configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub cors: CorsConfig,

    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Validates settings that every command relies on.
    ///
    /// Database URL validation is deferred to commands that actually open a
    /// connection, so purely local invocations still work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        self.logger.clone().into_logger_config()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.session.ttl_seconds, 86400);
    }

    #[test]
    fn test_database_validation() {
        let mut config = DatabaseConfig::default();
        assert!(config.validate().is_err());

        config.url = "postgres://localhost/fleetman".to_string();
        assert!(config.validate().is_ok());

        config.min_connections = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_validation() {
        let config = SessionConfig { ttl_seconds: 0 };
        assert!(config.validate().is_err());

        let config = SessionConfig { ttl_seconds: 3600 };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let settings = LoggerSettings {
            format: "xml".to_string(),
            ..Default::default()
        };
        assert!(settings.into_logger_config().is_err());
    }

    #[test]
    fn test_settings_deserialize_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://localhost/fleetman"
            auto_migrate = true

            [session]
            ttl_seconds = 7200
        "#;

        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert!(settings.database.auto_migrate);
        assert_eq!(settings.session.ttl_seconds, 7200);
        // Untouched sections keep their defaults
        assert_eq!(settings.logger.level, "info");
    }
}
