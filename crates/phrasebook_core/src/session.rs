//! Phrase session: the explicitly constructed application context.
//!
//! # Responsibility
//! - Wire form validation, debounced search input, the phrase store and the
//!   filter cache into one owned object handed to front ends.
//! - Track the two-step delete confirmation.
//!
//! # Invariants
//! - Blank submissions never reach the store.
//! - The store search term only changes when the debouncer promotes a value
//!   or the caller bypasses it explicitly.
//! - At most one delete awaits confirmation.

use crate::config::PhrasebookConfig;
use crate::debounce::Debouncer;
use crate::model::phrase::{Phrase, PhraseId};
use crate::persist::KeyValueStore;
use crate::search::cache::FilterCache;
use crate::search::filter::SearchOptions;
use crate::store::phrase_store::PhraseStore;
use log::debug;
use std::sync::Arc;
use std::time::Instant;

/// What the phrase grid should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    /// No phrases stored at all.
    Empty,
    /// Phrases exist but none match `term`.
    NoResults { term: String },
    /// `shown` of `total` phrases are visible. `filtering` is set whenever a
    /// search term is present, even one too short to filter.
    Results {
        shown: usize,
        total: usize,
        filtering: bool,
    },
}

pub struct PhraseSession<S: KeyValueStore> {
    store: PhraseStore<S>,
    search_input: Debouncer<String>,
    search_options: SearchOptions,
    cache: FilterCache,
    pending_delete: Option<PhraseId>,
}

impl<S: KeyValueStore> PhraseSession<S> {
    /// Hydrates a store from `storage` and builds a session around it.
    pub fn open(storage: S, config: &PhrasebookConfig) -> Self {
        Self {
            store: PhraseStore::hydrate(storage, config.store_options()),
            search_input: Debouncer::new(String::new(), config.debounce_delay()),
            search_options: config.search_options(),
            cache: FilterCache::new(),
            pending_delete: None,
        }
    }

    /// Adds a phrase from raw form input.
    ///
    /// Text and author are trimmed; blank text is rejected with `None`.
    pub fn submit_phrase(&mut self, raw_text: &str, raw_author: Option<&str>) -> Option<PhraseId> {
        let text = raw_text.trim();
        if text.is_empty() {
            debug!("event=phrase_submit module=session status=rejected reason=blank_text");
            return None;
        }
        Some(self.store.add(text, raw_author.map(str::trim)))
    }

    /// Feeds one keystroke's worth of search input observed at `now`.
    pub fn input_search(&mut self, raw: impl Into<String>, now: Instant) {
        self.search_input.update(raw.into(), now);
        if !self.search_input.is_pending() {
            self.apply_search_input();
        }
    }

    /// Promotes debounced search input whose window elapsed by `now`.
    ///
    /// Returns `true` when the search term changed hands to the store.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.search_input.poll(now) {
            return false;
        }
        self.apply_search_input();
        true
    }

    /// Applies `raw` as the search term without waiting for the window.
    pub fn search_now(&mut self, raw: impl Into<String>) {
        self.search_input.reset(raw.into());
        self.apply_search_input();
    }

    /// Drops pending input and clears the term immediately.
    pub fn clear_search(&mut self) {
        self.search_input.reset(String::new());
        self.store.clear_search_term();
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_input.is_pending()
    }

    pub fn search_term(&self) -> &str {
        self.store.search_term()
    }

    /// Phrases matching the current search term, oldest first.
    pub fn visible_phrases(&mut self) -> Arc<Vec<Phrase>> {
        self.cache.filter(
            self.store.phrases(),
            self.store.search_term(),
            &self.search_options,
        )
    }

    pub fn grid_view(&mut self) -> GridView {
        if self.store.is_empty() {
            return GridView::Empty;
        }

        let shown = self.visible_phrases().len();
        if shown == 0 {
            return GridView::NoResults {
                term: self.store.search_term().to_string(),
            };
        }

        GridView::Results {
            shown,
            total: self.store.len(),
            filtering: !self.store.search_term().is_empty(),
        }
    }

    /// Marks `id` for deletion pending confirmation.
    ///
    /// Returns `false` (and leaves any earlier request alone) if `id` is unknown.
    pub fn request_delete(&mut self, id: PhraseId) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    pub fn pending_delete(&self) -> Option<&Phrase> {
        self.pending_delete.and_then(|id| self.store.get(id))
    }

    /// Deletes the phrase awaiting confirmation and returns it.
    pub fn confirm_delete(&mut self) -> Option<Phrase> {
        let id = self.pending_delete.take()?;
        let phrase = self.store.get(id).cloned()?;
        self.store.delete(id);
        Some(phrase)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Cancels pending debounced input. Call before dropping the front end.
    pub fn teardown(&mut self) {
        self.search_input.cancel();
        self.pending_delete = None;
    }

    pub fn store(&self) -> &PhraseStore<S> {
        &self.store
    }

    pub fn into_store(self) -> PhraseStore<S> {
        self.store
    }

    fn apply_search_input(&mut self) {
        if self.store.search_term() != self.search_input.value().as_str() {
            self.store.set_search_term(self.search_input.value().clone());
        }
    }
}
