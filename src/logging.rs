//! Logging setup
//!
//! Loads an optional JSON logging configuration from a fixed relative path
//! and installs the global tracing subscriber. `RUST_LOG` always wins over
//! the file.

use crate::error::{DbError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Fixed relative path of the logging configuration file
pub const LOGGING_CONFIG_PATH: &str = "logging.json";

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive (e.g. "info", "borealis_db=debug")
    pub level: String,

    /// Emit ANSI color codes
    pub ansi: bool,

    /// Include the event's target module in output
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
            show_target: false,
        }
    }
}

/// Load a logging configuration from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<LoggingConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;

    Ok(config)
}

/// Initialize logging from `logging.json` when present, defaults otherwise
pub fn init() -> Result<()> {
    let config = if Path::new(LOGGING_CONFIG_PATH).exists() {
        load_config(LOGGING_CONFIG_PATH)?
    } else {
        LoggingConfig::default()
    };

    init_with_config(&config)
}

/// Initialize logging with an explicit filter directive, ignoring the file
pub fn init_with_level(level: &str) -> Result<()> {
    let config = LoggingConfig {
        level: level.to_string(),
        ..LoggingConfig::default()
    };

    init_with_config(&config)
}

/// Install the global subscriber for the given configuration
pub fn init_with_config(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| DbError::LoggingError(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(config.show_target)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| DbError::LoggingError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level": "debug"}"#).unwrap();

        assert_eq!(config.level, "debug");
        assert!(config.ansi);
        assert!(!config.show_target);
    }

    #[test]
    fn defaults_are_sane() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
    }

    #[test]
    fn load_config_reports_missing_file() {
        assert!(load_config("does-not-exist.json").is_err());
    }
}
