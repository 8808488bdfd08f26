//! Application configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file (`apidoc.toml`, or the path in `APIDOC_CONFIG`), then `APIDOC_*`
//! environment variables. Nested keys use `__`, e.g.
//! `APIDOC_FETCH__TIMEOUT_MS=5000`.

use std::path::{Path, PathBuf};

use apidoc_application::{ApplicationError, ApplicationResult};
use apidoc_domain::FetchSettings;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "apidoc.toml";

/// Runtime configuration of the fetch binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial document URL.
    pub url: Option<String>,
    /// JSON file of authorized security activations.
    pub auth_file: Option<PathBuf>,
    /// HTTP adapter settings.
    pub fetch: FetchSettings,
}

impl AppConfig {
    /// Loads configuration from the file named by `APIDOC_CONFIG` (or
    /// `apidoc.toml`) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Config` if a source is malformed.
    pub fn load() -> ApplicationResult<Self> {
        let path = std::env::var_os("APIDOC_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        Self::load_from(&path, Environment::with_prefix("APIDOC"))
    }

    /// Loads configuration from `path` (optional) and the given environment source.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Config` if a source is malformed.
    pub fn load_from(path: &Path, environment: Environment) -> ApplicationResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ApplicationError::Config(e.to_string()))
    }
}
