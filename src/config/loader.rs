use crate::config::config::AppConfig;
use crate::error::Result;
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::PathBuf;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default sources
    ///
    /// Merge order:
    /// 1. ./config.toml
    /// 2. POLARITY_-prefixed environment variables
    /// 3. Bare environment names recognized for deployment parity
    ///    (MODEL_DIR, MODEL_VERSION, TELEMETRY_CONNECTION_STRING)
    pub fn load() -> Result<AppConfig> {
        Self::load_from(default_config_path())
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: PathBuf) -> Result<AppConfig> {
        let config: AppConfig = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("POLARITY_").split("_").global())
            .extract()?;

        Ok(Self::apply_bare_env(config))
    }

    /// Overlay the bare environment names the service documents
    fn apply_bare_env(mut config: AppConfig) -> AppConfig {
        if let Ok(dir) = std::env::var("MODEL_DIR") {
            config.model.dir = PathBuf::from(dir);
        }
        if let Ok(version) = std::env::var("MODEL_VERSION") {
            config.model.version = version;
        }
        if let Ok(conn) = std::env::var("TELEMETRY_CONNECTION_STRING") {
            config.telemetry.connection_string = conn;
        }
        config
    }

    /// Validate configuration before startup
    pub fn validate(config: &AppConfig) -> std::result::Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.telemetry.connection_string.trim().is_empty() {
            return Err(ConfigValidationError::MissingTelemetryConnection);
        }

        if config.model.version.trim().is_empty() {
            return Err(ConfigValidationError::MissingModelVersion);
        }

        Ok(())
    }
}

/// Configuration validation error
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("telemetry connection string is not configured")]
    MissingTelemetryConnection,

    #[error("model version label is empty")]
    MissingModelVersion,
}

/// Default configuration file path
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
