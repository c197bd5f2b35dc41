//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use chrono::Weekday;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::AppConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "SHIFT_PAY_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/app.yaml";

/// Loads and provides access to the service configuration.
///
/// # File format
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:3000"
/// auth:
///   user_header: "x-user-id"
/// reporting:
///   week_starts_on: monday
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/app.yaml").unwrap();
/// println!("Listening on {}", loader.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML or unknown values
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Loads configuration for the binary.
    ///
    /// Uses the file named by [`CONFIG_PATH_ENV`] when set (it must exist).
    /// Otherwise uses [`DEFAULT_CONFIG_PATH`] if present, or built-in
    /// defaults if not.
    pub fn from_env() -> EngineResult<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                info!(path = %path, "Loading configuration");
                Self::load(path)
            }
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                info!(path = DEFAULT_CONFIG_PATH, "Loading configuration");
                Self::load(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the address the HTTP server binds to.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }

    /// Returns the name of the header carrying the authenticated user ID.
    pub fn user_header(&self) -> &str {
        &self.config.auth.user_header
    }

    /// Returns the weekday the fortnight view's weeks start on.
    pub fn week_starts_on(&self) -> Weekday {
        self.config.reporting.week_starts_on
    }
}
