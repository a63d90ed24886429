//! Viewer configuration with environment overrides.
//!
//! # Invariants
//! - Blank environment values are ignored, never applied.
//! - A malformed debounce value is an error, not a silent default.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_CSV_PATH: &str = "CLASSVIEW_CSV_PATH";
pub const ENV_EXPORT_NAME: &str = "CLASSVIEW_EXPORT_NAME";
pub const ENV_DEBOUNCE_MS: &str = "CLASSVIEW_DEBOUNCE_MS";
pub const ENV_LOG_LEVEL: &str = "CLASSVIEW_LOG_LEVEL";

const DEFAULT_CSV_PATH: &str = "data/coicop_example.csv";
const DEFAULT_EXPORT_NAME: &str = "classview_filtered.csv";
const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value for `key` is not a non-negative integer.
    InvalidInteger { key: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInteger { key, value } => {
                write!(f, "`{key}` must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Session-level settings for the viewer front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Dataset loaded at startup.
    pub csv_path: PathBuf,
    /// Suggested file name for exports.
    pub export_file_name: String,
    /// Quiet window for search-box input.
    pub debounce: Duration,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            export_file_name: DEFAULT_EXPORT_NAME.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            log_level: default_log_level().to_string(),
        }
    }
}

impl ViewerConfig {
    /// Defaults overridden by `CLASSVIEW_*` process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value_of = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value_of(ENV_CSV_PATH) {
            config.csv_path = PathBuf::from(path);
        }
        if let Some(name) = value_of(ENV_EXPORT_NAME) {
            config.export_file_name = name;
        }
        if let Some(raw) = value_of(ENV_DEBOUNCE_MS) {
            let millis = raw.parse::<u64>().map_err(|_| ConfigError::InvalidInteger {
                key: ENV_DEBOUNCE_MS,
                value: raw.clone(),
            })?;
            config.debounce = Duration::from_millis(millis);
        }
        if let Some(level) = value_of(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        Ok(config)
    }
}
