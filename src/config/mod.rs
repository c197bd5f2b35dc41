//! Configuration loading for the shift pay service.
//!
//! This module loads the service settings (bind address, caller
//! identification header, fortnight week start) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/app.yaml").unwrap();
//! println!("Weeks start on {}", config.week_starts_on());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{AppConfig, AuthConfig, ReportingConfig, ServerConfig};
