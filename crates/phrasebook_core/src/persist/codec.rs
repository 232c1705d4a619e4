//! JSON codec for persisted phrase state: `{ "phrases": [...] }`.

use super::KvResult;
use crate::model::phrase::Phrase;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    phrases: &'a [Phrase],
}

#[derive(Deserialize)]
struct PersistedState {
    #[serde(default)]
    phrases: Vec<Phrase>,
}

/// Serializes the phrase collection for storage.
pub fn encode_state(phrases: &[Phrase]) -> KvResult<String> {
    Ok(serde_json::to_string(&PersistedStateRef { phrases })?)
}

/// Parses stored phrase state. A payload without `phrases` yields an empty
/// collection.
pub fn decode_state(payload: &str) -> KvResult<Vec<Phrase>> {
    let state: PersistedState = serde_json::from_str(payload)?;
    Ok(state.phrases)
}
