// ABOUTME: Shared utility functions for setkeep
// ABOUTME: Database file name handling

use crate::constants::{DATABASE_EXTENSION, DEFAULT_DATABASE_NAME};

/// Append the `.db` extension when the name does not already carry it.
///
/// The check is case-insensitive, so `Prefs.DB` is kept as is. A blank name
/// falls back to [`DEFAULT_DATABASE_NAME`].
pub fn normalize_database_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_DATABASE_NAME.to_string();
    }

    if name.to_ascii_lowercase().ends_with(DATABASE_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, DATABASE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_appends_extension() {
        assert_eq!(normalize_database_name("Demo.Settings"), "Demo.Settings.db");
        assert_eq!(normalize_database_name("prefs"), "prefs.db");
    }

    #[test]
    fn test_normalize_keeps_existing_extension() {
        assert_eq!(normalize_database_name("Settings.db"), "Settings.db");
        assert_eq!(normalize_database_name("Settings.DB"), "Settings.DB");
    }

    #[test]
    fn test_normalize_blank_uses_default() {
        assert_eq!(normalize_database_name(""), DEFAULT_DATABASE_NAME);
        assert_eq!(normalize_database_name("   "), DEFAULT_DATABASE_NAME);
    }

    #[test]
    fn test_normalize_does_not_match_partial_extension() {
        // "db" without the dot is part of the name
        assert_eq!(normalize_database_name("mydb"), "mydb.db");
    }
}
