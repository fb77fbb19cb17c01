// ABOUTME: Core types, traits, and utilities for setkeep
// ABOUTME: Storage-agnostic entry model and read-time value coercion

pub mod constants;
pub mod types;
pub mod utils;
pub mod value;

// Re-export main types
pub use types::SettingsEntry;

// Re-export constants
pub use constants::{data_dir, DATABASE_EXTENSION, DEFAULT_DATABASE_NAME};

// Re-export utilities
pub use utils::normalize_database_name;

// Re-export coercion
pub use value::{CoercionError, FromSettingValue, ToSettingValue};
