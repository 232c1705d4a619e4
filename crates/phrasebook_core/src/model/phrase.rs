//! Phrase domain model.
//!
//! # Responsibility
//! - Define the record stored in the phrase collection.
//! - Resolve the author sentinel for anonymous phrases.
//!
//! # Invariants
//! - `id` is stable and never reused for another phrase.
//! - `text` is stored exactly as submitted; trimming is a caller concern.
//! - `author` is never empty once a phrase enters a store.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Author recorded when the caller does not supply one.
pub const DEFAULT_AUTHOR: &str = "Desconocido";

/// Stable identifier for one phrase.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PhraseId = Uuid;

/// One stored phrase.
///
/// Serialized with a camelCase `createdAt` field to stay compatible with
/// existing `phrases-app-data` payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: PhraseId,
    pub text: String,
    /// Empty only for records loaded from data written before authors existed;
    /// stores replace it with their configured sentinel on hydrate.
    #[serde(default)]
    pub author: String,
    /// Unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Phrase {
    /// Creates a phrase with a generated ID and the current timestamp.
    ///
    /// Empty or whitespace-only authors fall back to [`DEFAULT_AUTHOR`].
    pub fn new(text: impl Into<String>, author: Option<&str>) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            text,
            resolve_author(author, DEFAULT_AUTHOR),
            now_epoch_ms(),
        )
    }

    /// Creates a phrase with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: PhraseId,
        text: impl Into<String>,
        author: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author: author.into(),
            created_at,
        }
    }

    /// Returns whether the author is the given sentinel.
    pub fn is_anonymous(&self, sentinel: &str) -> bool {
        self.author == sentinel
    }
}

/// Picks the author to record: the supplied one unless missing or blank.
pub fn resolve_author(author: Option<&str>, sentinel: &str) -> String {
    match author {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => sentinel.to_string(),
    }
}

/// Current wall clock in Unix epoch milliseconds.
///
/// Returns `0` when the clock is set before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
