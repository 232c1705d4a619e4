//! Phrase domain model.
//!
//! # Responsibility
//! - Define the canonical phrase record shared by store, search and persistence.
//!
//! # Invariants
//! - Every phrase is identified by a stable `PhraseId`.
//! - `created_at` is assigned once at creation and never rewritten.

pub mod phrase;
