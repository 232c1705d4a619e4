//! Literal substring filtering over phrase text and author.
//!
//! # Responsibility
//! - Compile a normalized, escaped term into a case-insensitive matcher.
//! - Return the order-preserving subset of phrases matching either field.
//!
//! # Invariants
//! - Below the length gate the input is returned as-is (same `Arc`, or a
//!   borrowed slice).
//! - Filtering never fails; regex build errors fall back to lowercase
//!   containment applied to both sides.

use crate::model::phrase::Phrase;
use crate::search::escape::escape_pattern;
use crate::search::normalize::{normalize_query, passes_min_len};
use log::warn;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::sync::Arc;

/// Minimum normalized term length that triggers filtering.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Tunables for filter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Terms with fewer chars than this leave the collection unfiltered.
    pub min_query_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Compiled matcher for one normalized search term.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    term: String,
    kind: MatcherKind,
}

#[derive(Debug, Clone)]
enum MatcherKind {
    Pattern(Regex),
    /// Lowercased term; haystacks are lowercased on each test.
    Lowercase(String),
}

impl PhraseMatcher {
    /// Builds a matcher for `raw`, or `None` when the normalized term does
    /// not pass the length gate.
    pub fn new(raw: &str, options: &SearchOptions) -> Option<Self> {
        let term = normalize_query(raw);
        if !passes_min_len(&term, options.min_query_len) {
            return None;
        }
        Some(Self::compile(term))
    }

    fn compile(term: String) -> Self {
        match RegexBuilder::new(&escape_pattern(&term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Self {
                term,
                kind: MatcherKind::Pattern(pattern),
            },
            Err(err) => {
                warn!(
                    "event=search_compile module=search status=fallback term_chars={} error={}",
                    term.chars().count(),
                    err
                );
                Self::lowercase(term)
            }
        }
    }

    fn lowercase(term: String) -> Self {
        let lowered = term.to_lowercase();
        Self {
            term,
            kind: MatcherKind::Lowercase(lowered),
        }
    }

    /// Normalized term this matcher was built from.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Tests one field value.
    pub fn matches_str(&self, haystack: &str) -> bool {
        match &self.kind {
            MatcherKind::Pattern(pattern) => pattern.is_match(haystack),
            MatcherKind::Lowercase(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }

    /// A phrase matches when its text or its author contains the term.
    pub fn is_match(&self, phrase: &Phrase) -> bool {
        self.matches_str(&phrase.text) || self.matches_str(&phrase.author)
    }
}

/// Filters a borrowed slice.
///
/// Returns `Cow::Borrowed(phrases)` when the term does not pass the gate.
pub fn matching_phrases<'a>(
    phrases: &'a [Phrase],
    raw: &str,
    options: &SearchOptions,
) -> Cow<'a, [Phrase]> {
    match PhraseMatcher::new(raw, options) {
        None => Cow::Borrowed(phrases),
        Some(matcher) => Cow::Owned(
            phrases
                .iter()
                .filter(|phrase| matcher.is_match(phrase))
                .cloned()
                .collect(),
        ),
    }
}

/// Filters a shared snapshot.
///
/// Returns a clone of the same `Arc` when the term does not pass the gate, so
/// callers can skip work with [`Arc::ptr_eq`].
pub fn filter_phrases(
    phrases: &Arc<Vec<Phrase>>,
    raw: &str,
    options: &SearchOptions,
) -> Arc<Vec<Phrase>> {
    match PhraseMatcher::new(raw, options) {
        None => Arc::clone(phrases),
        Some(matcher) => Arc::new(
            phrases
                .iter()
                .filter(|phrase| matcher.is_match(phrase))
                .cloned()
                .collect(),
        ),
    }
}
