// ABOUTME: Data layer and persistence for setkeep
// ABOUTME: SQLite schema, row model and the settings store

pub mod error;
pub mod model;
pub mod schema;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use model::SettingsRow;
pub use store::{SettingsStore, StoreConfig};

// Re-export core types for convenience
pub use setkeep_core::{CoercionError, FromSettingValue, SettingsEntry, ToSettingValue};
