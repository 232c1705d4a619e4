//! Phrase collection state container.
//!
//! # Responsibility
//! - Own the ordered phrase collection and the current search term.
//! - Persist the collection through an injected key-value store.
//!
//! # Invariants
//! - Phrase ids are unique within one store.
//! - New phrases are appended; deletes keep the relative order of the rest.
//! - Persistence failures are logged and never abort a mutation.

pub mod phrase_store;
