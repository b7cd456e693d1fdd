//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, Environment, File};
use phrases_core::PhrasesError;
use std::path::Path;
use tracing::{debug, info};

/// Loads the application configuration.
///
/// Configuration is loaded from multiple sources in order:
/// 1. `config/default.toml` - Default values
/// 2. `config/{environment}.toml` - Environment-specific overrides
/// 3. `config/local.toml` - Local overrides (not committed)
/// 4. Environment variables with `PHRASES_` prefix (`__` separator)
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader reading from the given directory.
    #[must_use]
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader reading from the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and deserializes the configuration.
    pub fn load(&self) -> Result<AppConfig, PhrasesError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("PHRASES_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", self.config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", self.config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        let local_path = format!("{}/local.toml", self.config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("PHRASES")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| PhrasesError::Configuration(format!("Failed to build config: {}", e)))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| PhrasesError::Configuration(format!("Failed to deserialize config: {}", e)))?;

        crate::validate(&app_config)?;

        Ok(app_config)
    }
}
