//! Configuration management for gliderlog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::validation::FlightDraft;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "gliderlog";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "glider_logbook.db";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "GLIDERLOG_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `GLIDERLOG_`, sections split by `__`)
/// 2. TOML config file at `~/.config/gliderlog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Values pre-filled into new flights.
    pub defaults: DefaultsConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/gliderlog/glider_logbook.db`
    pub database_path: Option<PathBuf>,
    /// Use write-ahead logging for the database file.
    pub wal_mode: bool,
}

/// Pre-filled values for new flights.
///
/// Most pilots fly from one site with one launch method; these save typing
/// them on every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Pilot in command.
    pub pilot_in_command: Option<String>,
    /// Launch method.
    pub launch_method: Option<String>,
    /// Launch site.
    pub launch_site: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: None, // Will be resolved to default at runtime
            wal_mode: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.storage.database_path {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "database_path cannot be empty".to_string(),
                });
            }
        }

        let defaults = [
            ("pilot_in_command", &self.defaults.pilot_in_command),
            ("launch_method", &self.defaults.launch_method),
            ("launch_site", &self.defaults.launch_site),
        ];
        for (name, value) in defaults {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::ConfigValidation {
                    message: format!("defaults.{name} cannot be blank"),
                });
            }
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// A blank draft dated today with the configured defaults filled in.
    #[must_use]
    pub fn new_draft(&self) -> FlightDraft {
        let mut draft = FlightDraft::for_today();
        if let Some(pilot) = &self.defaults.pilot_in_command {
            draft.pilot_in_command.clone_from(pilot);
        }
        if let Some(method) = &self.defaults.launch_method {
            draft.launch_method.clone_from(method);
        }
        if let Some(site) = &self.defaults.launch_site {
            draft.launch_site.clone_from(site);
        }
        draft
    }
}
