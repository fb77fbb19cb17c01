// ABOUTME: Settings entry type definition
// ABOUTME: Storage-agnostic representation of one persisted setting

use serde::{Deserialize, Serialize};

/// A single settings record.
///
/// `id` is assigned by the store on insert and is `0` until then. `key` is
/// chosen by the caller and is unique across the store. `value` is always
/// text; see [`crate::value`] for typed access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsEntry {
    pub id: i64,
    pub key: i64,
    pub value: String,
    pub description: String,
}

impl SettingsEntry {
    /// Build an entry that has not been persisted yet
    pub fn new(key: i64, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            key,
            value: value.into(),
            description: description.into(),
        }
    }

    /// Whether the store has assigned an id to this entry
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
