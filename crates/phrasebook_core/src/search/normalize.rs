//! Search query normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Collapses whitespace runs into one ASCII space and trims both ends.
///
/// Whitespace-only input normalizes to an empty string.
pub fn normalize_query(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw, " ").trim().to_string()
}

/// Returns whether a normalized term is long enough to filter with.
///
/// Length is counted in `char`s so one accented letter or emoji counts once.
pub fn passes_min_len(normalized: &str, min_len: usize) -> bool {
    normalized.chars().count() >= min_len
}
