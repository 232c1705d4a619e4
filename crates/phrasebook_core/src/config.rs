//! Runtime configuration for phrasebook sessions.
//!
//! # Responsibility
//! - Hold the tunables shared by store, search, debounce and logging.
//! - Load overrides from a JSON file; missing fields keep their defaults.
//!
//! # Invariants
//! - A config that passed `validate()` never yields an empty storage key or
//!   author sentinel, and never disables the search gate entirely.

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::logging::{default_log_level, normalize_level};
use crate::model::phrase::DEFAULT_AUTHOR;
use crate::persist::DEFAULT_STORAGE_KEY;
use crate::search::filter::{SearchOptions, DEFAULT_MIN_QUERY_LEN};
use crate::store::phrase_store::StoreOptions;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Session-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhrasebookConfig {
    /// Key holding the serialized phrase collection.
    pub storage_key: String,
    /// Author recorded for phrases submitted without one.
    pub default_author: String,
    /// Normalized search terms shorter than this do not filter.
    pub min_query_len: usize,
    /// Quiet window before search input is applied.
    pub debounce_ms: u64,
    pub log_level: String,
}

impl Default for PhrasebookConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            debounce_ms: u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(300),
            log_level: default_log_level().to_string(),
        }
    }
}

impl PhrasebookConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "storage_key cannot be empty".to_string(),
            ));
        }
        if self.default_author.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_author cannot be empty".to_string(),
            ));
        }
        if self.min_query_len == 0 {
            return Err(ConfigError::Invalid(
                "min_query_len must be at least 1".to_string(),
            ));
        }
        normalize_level(&self.log_level).map_err(ConfigError::Invalid)?;
        Ok(())
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            min_query_len: self.min_query_len,
        }
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            storage_key: self.storage_key.clone(),
            default_author: self.default_author.clone(),
        }
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
