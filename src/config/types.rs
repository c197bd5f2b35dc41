//! Configuration types for the shift pay service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so a partial file is valid.

use chrono::Weekday;
use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Settings for identifying the caller.
///
/// Authentication is delegated to an identity provider sitting in front of
/// the service; it forwards the authenticated user ID in a request header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Name of the header carrying the authenticated user ID.
    pub user_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_header: "x-user-id".to_string(),
        }
    }
}

/// Settings for the reporting views.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// The weekday the fortnight view's weeks start on.
    pub week_starts_on: Weekday,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            week_starts_on: Weekday::Mon,
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Caller identification settings.
    pub auth: AuthConfig,
    /// Reporting settings.
    pub reporting: ReportingConfig,
}
