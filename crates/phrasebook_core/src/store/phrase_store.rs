//! Phrase store backed by a [`KeyValueStore`].
//!
//! The collection is held as an `Arc` snapshot that is replaced on every
//! mutation. Readers that cloned a snapshot keep seeing it unchanged, and
//! consumers can detect "nothing changed" with [`Arc::ptr_eq`].

use crate::model::phrase::{now_epoch_ms, resolve_author, Phrase, PhraseId, DEFAULT_AUTHOR};
use crate::persist::{decode_state, encode_state, KeyValueStore, DEFAULT_STORAGE_KEY};
use log::{error, info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Construction options for [`PhraseStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Key holding the serialized collection.
    pub storage_key: String,
    /// Author recorded when none is supplied.
    pub default_author: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// Ordered phrase collection plus the current search term.
pub struct PhraseStore<S: KeyValueStore> {
    storage: S,
    options: StoreOptions,
    phrases: Arc<Vec<Phrase>>,
    search_term: String,
}

impl<S: KeyValueStore> PhraseStore<S> {
    /// Loads persisted phrases from `storage`, falling back to an empty
    /// collection when the key is absent, unreadable or malformed.
    ///
    /// Duplicate ids keep their first occurrence. Blank authors are replaced
    /// with `options.default_author`.
    pub fn hydrate(storage: S, options: StoreOptions) -> Self {
        let phrases = load_phrases(&storage, &options);
        Self {
            storage,
            options,
            phrases: Arc::new(phrases),
            search_term: String::new(),
        }
    }

    /// Appends a phrase and persists the collection.
    ///
    /// `text` is stored exactly as given; rejecting blank input is the
    /// caller's job.
    pub fn add(&mut self, text: impl Into<String>, author: Option<&str>) -> PhraseId {
        let phrase = Phrase::with_id(
            Uuid::new_v4(),
            text,
            resolve_author(author, &self.options.default_author),
            now_epoch_ms(),
        );
        let phrase_id = phrase.id;

        Arc::make_mut(&mut self.phrases).push(phrase);
        info!(
            "event=phrase_add module=store status=ok phrase_id={} total={}",
            phrase_id,
            self.phrases.len()
        );
        self.persist();
        phrase_id
    }

    /// Removes the phrase with `id`.
    ///
    /// Returns `false` without touching storage when no such phrase exists.
    pub fn delete(&mut self, id: PhraseId) -> bool {
        let Some(index) = self.phrases.iter().position(|phrase| phrase.id == id) else {
            info!("event=phrase_delete module=store status=noop phrase_id={id}");
            return false;
        };

        Arc::make_mut(&mut self.phrases).remove(index);
        info!(
            "event=phrase_delete module=store status=ok phrase_id={} total={}",
            id,
            self.phrases.len()
        );
        self.persist();
        true
    }

    /// Replaces the search term verbatim. Normalization happens at filter time.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search_term(&mut self) {
        self.search_term.clear();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Current collection snapshot, oldest first.
    pub fn phrases(&self) -> &Arc<Vec<Phrase>> {
        &self.phrases
    }

    pub fn get(&self, id: PhraseId) -> Option<&Phrase> {
        self.phrases.iter().find(|phrase| phrase.id == id)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let result = encode_state(&self.phrases)
            .and_then(|payload| self.storage.set(&self.options.storage_key, &payload));
        if let Err(err) = result {
            error!(
                "event=phrases_persist module=store status=error key={} total={} error={}",
                self.options.storage_key,
                self.phrases.len(),
                err
            );
        }
    }
}

fn load_phrases<S: KeyValueStore>(storage: &S, options: &StoreOptions) -> Vec<Phrase> {
    let key = options.storage_key.as_str();
    let payload = match storage.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            info!("event=phrases_hydrate module=store status=empty key={key}");
            return Vec::new();
        }
        Err(err) => {
            warn!("event=phrases_hydrate module=store status=fallback key={key} error_code=read_failed error={err}");
            return Vec::new();
        }
    };

    let decoded = match decode_state(&payload) {
        Ok(phrases) => phrases,
        Err(err) => {
            warn!("event=phrases_hydrate module=store status=fallback key={key} error_code=decode_failed error={err}");
            return Vec::new();
        }
    };

    let mut seen = HashSet::with_capacity(decoded.len());
    let mut phrases = Vec::with_capacity(decoded.len());
    let mut dropped = 0usize;
    for mut phrase in decoded {
        if !seen.insert(phrase.id) {
            dropped += 1;
            continue;
        }
        if phrase.author.trim().is_empty() {
            phrase.author = options.default_author.clone();
        }
        phrases.push(phrase);
    }

    if dropped > 0 {
        warn!("event=phrases_hydrate module=store status=deduplicated key={key} dropped={dropped}");
    }
    info!(
        "event=phrases_hydrate module=store status=ok key={key} total={}",
        phrases.len()
    );
    phrases
}
