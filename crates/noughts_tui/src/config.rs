//! Front end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct Config {
    /// Logging settings.
    log: LogConfig,

    /// Board rendering settings.
    board: BoardConfig,
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize, new)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct LogConfig {
    /// Log file used while the terminal UI owns stdout.
    file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    filter: String,
}

/// Board rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Show 1-9 in empty cells.
    show_numbers: bool,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

#[instrument]
fn default_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(default_log_file(), default_filter())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded");
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), else `fallback` if it
    /// exists, else defaults.
    #[instrument(skip_all)]
    pub fn load_or_default(
        explicit: Option<&Path>,
        fallback: &Path,
    ) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.is_file() => Self::from_file(fallback),
            None => {
                debug!(fallback = %fallback.display(), "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads `explicit`, or [`DEFAULT_CONFIG_PATH`] if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
