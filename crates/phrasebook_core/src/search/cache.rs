//! Memoize-last-result cache for filtered views.
//!
//! # Invariants
//! - A hit requires the same snapshot allocation, normalized term and gate.
//! - Hits return a clone of the previously produced `Arc`.

use crate::model::phrase::Phrase;
use crate::search::filter::{filter_phrases, SearchOptions};
use crate::search::normalize::normalize_query;
use log::debug;
use std::sync::Arc;

#[derive(Debug)]
struct CacheEntry {
    // Holding the source keeps its allocation alive, so `ptr_eq` cannot be
    // fooled by a freed-and-reused address.
    source: Arc<Vec<Phrase>>,
    term: String,
    min_query_len: usize,
    output: Arc<Vec<Phrase>>,
}

/// Single-entry filter cache.
#[derive(Debug, Default)]
pub struct FilterCache {
    entry: Option<CacheEntry>,
    hits: u64,
    misses: u64,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filtered view, recomputing only when an input changed.
    pub fn filter(
        &mut self,
        phrases: &Arc<Vec<Phrase>>,
        raw: &str,
        options: &SearchOptions,
    ) -> Arc<Vec<Phrase>> {
        let term = normalize_query(raw);

        if let Some(entry) = &self.entry {
            if Arc::ptr_eq(&entry.source, phrases)
                && entry.term == term
                && entry.min_query_len == options.min_query_len
            {
                self.hits += 1;
                return Arc::clone(&entry.output);
            }
        }

        self.misses += 1;
        let output = filter_phrases(phrases, &term, options);
        debug!(
            "event=filter_recompute module=search status=ok input={} output={} term_chars={}",
            phrases.len(),
            output.len(),
            term.chars().count()
        );
        self.entry = Some(CacheEntry {
            source: Arc::clone(phrases),
            term,
            min_query_len: options.min_query_len,
            output: Arc::clone(&output),
        });
        output
    }

    /// Drops the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
