//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/swordle/config.toml)
//! 3. Environment variables (SWORDLE_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
const ENV_PREFIX: &str = "SWORDLE";

/// Default daily scripture endpoint (the date is appended as a path segment)
pub const DEFAULT_SCRIPTURE_URL: &str = "https://notes.dlopez.app/api/sword/dt";

/// Default timeout for the daily scripture lookup, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory for data storage (SQLite db, logs)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Base URL of the daily scripture service
    #[serde(default = "default_scripture_url")]
    pub scripture_url: String,

    /// Timeout for the daily scripture lookup
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Log file used when SWORDLE_LOG is set (stderr otherwise)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            scripture_url: default_scripture_url(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (SWORDLE_DATA_DIR, SWORDLE_SCRIPTURE_URL, ...)
    /// 2. Config file (~/.config/swordle/config.toml or SWORDLE_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration, preferring an explicit path given on the command line
    pub fn load_with_cli_override(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.ensure_data_dir()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // SWORDLE_DATA_DIR
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        // SWORDLE_SCRIPTURE_URL
        if let Ok(val) = std::env::var(format!("{}_SCRIPTURE_URL", ENV_PREFIX)) {
            if !val.is_empty() {
                self.scripture_url = val;
            }
        }

        // SWORDLE_FETCH_TIMEOUT (ignored unless it parses)
        if let Ok(val) = std::env::var(format!("{}_FETCH_TIMEOUT", ENV_PREFIX)) {
            if let Ok(secs) = val.trim().parse() {
                self.fetch_timeout_secs = secs;
            }
        }

        // SWORDLE_LOG_FILE
        if let Ok(val) = std::env::var(format!("{}_LOG_FILE", ENV_PREFIX)) {
            self.log_file = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
    }

    /// Ensure data directory exists
    fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        }
        Ok(())
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with SWORDLE_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swordle")
            .join("config.toml")
    }

    /// Get the path to the SQLite database holding the streak slots
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("swordle.db")
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swordle")
}

fn default_scripture_url() -> String {
    DEFAULT_SCRIPTURE_URL.to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}
