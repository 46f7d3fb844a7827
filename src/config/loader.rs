//! Configuration loader for fleetman
//!
//! Provides the `ConfigLoader` struct that handles loading configuration
//! from multiple sources with proper precedence.

use std::path::PathBuf;

use config::{Config, Environment, File};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "FLEET_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "FLEET_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "FLEET";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources in order of priority:
/// 1. `default.toml` - Base default configuration
/// 2. `{environment}.toml` - Environment-specific configuration
/// 3. `local.toml` - Local development overrides
/// 4. `FLEET_*` environment variables (highest priority)
///
/// Every file layer is optional; the serde defaults on `Settings` make a
/// bare environment-variable configuration viable.
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if both `FLEET_CONFIG_DIR` and `FLEET_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "FLEET_CONFIG_DIR and FLEET_CONFIG_FILE cannot both be set. \
                 Use FLEET_CONFIG_DIR for layered configuration or \
                 FLEET_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = &self.config_file {
            builder = builder.add_source(File::from(file.clone()).required(true));
        } else {
            builder = builder
                .add_source(File::from(self.config_dir.join("default")).required(false))
                .add_source(
                    File::from(self.config_dir.join(self.environment.as_str())).required(false),
                )
                .add_source(File::from(self.config_dir.join("local")).required(false));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        Ok(config)
    }
}
