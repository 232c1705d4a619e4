//! Core logic for Phrasebook.
//! This crate is the single source of truth for phrase and search invariants.

pub mod config;
pub mod db;
pub mod debounce;
pub mod logging;
pub mod model;
pub mod persist;
pub mod search;
pub mod session;
pub mod store;

pub use config::{ConfigError, PhrasebookConfig};
pub use debounce::Debouncer;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::phrase::{Phrase, PhraseId, DEFAULT_AUTHOR};
pub use persist::{KeyValueStore, KvError, KvResult, MemoryKvStore, SqliteKvStore};
pub use search::cache::FilterCache;
pub use search::escape::escape_pattern;
pub use search::filter::{filter_phrases, matching_phrases, PhraseMatcher, SearchOptions};
pub use search::normalize::normalize_query;
pub use session::{GridView, PhraseSession};
pub use store::phrase_store::{PhraseStore, StoreOptions};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
