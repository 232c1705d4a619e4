//! Phrase search entry points.
//!
//! # Responsibility
//! - Turn free-text input into a literal, case-insensitive matcher.
//! - Filter phrase snapshots on text or author while preserving order.
//! - Memoize the last filtered view for repeated reads.
//!
//! # Invariants
//! - User text never reaches the regex engine unescaped.
//! - Terms shorter than the configured gate leave the input untouched.

pub mod cache;
pub mod escape;
pub mod filter;
pub mod normalize;
