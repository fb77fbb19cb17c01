// ABOUTME: Storage row shape for settings entries
// ABOUTME: Explicit conversions between rows and the public entry model

use setkeep_core::SettingsEntry;
use sqlx::FromRow;

/// One row of the `Settings` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct SettingsRow {
    #[sqlx(rename = "Id")]
    pub id: i64,
    #[sqlx(rename = "Key")]
    pub key: i64,
    #[sqlx(rename = "Value")]
    pub value: String,
    #[sqlx(rename = "Description")]
    pub description: String,
}

impl SettingsRow {
    /// Convert a public entry into its row shape. Inverse of [`SettingsRow::into_entry`].
    pub fn from_entry(entry: &SettingsEntry) -> Self {
        Self {
            id: entry.id,
            key: entry.key,
            value: entry.value.clone(),
            description: entry.description.clone(),
        }
    }

    /// Convert a row into the public entry. Inverse of [`SettingsRow::from_entry`].
    pub fn into_entry(self) -> SettingsEntry {
        SettingsEntry {
            id: self.id,
            key: self.key,
            value: self.value,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conversions_mirror_each_other() {
        let entry = SettingsEntry {
            id: 4,
            key: 2,
            value: "10".to_string(),
            description: "Some description".to_string(),
        };

        let row = SettingsRow::from_entry(&entry);
        assert_eq!(row.id, 4);
        assert_eq!(row.key, 2);
        assert_eq!(row.value, "10");
        assert_eq!(row.description, "Some description");

        assert_eq!(row.into_entry(), entry);
    }
}
