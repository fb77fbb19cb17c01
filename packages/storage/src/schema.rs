// ABOUTME: On-disk table shape for settings entries
// ABOUTME: Idempotent DDL and the SQL used by the settings store

/// Settings table. `AUTOINCREMENT` keeps ids monotonic and never reused.
pub const CREATE_SETTINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS "Settings" (
        "Id" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        "Key" INTEGER NOT NULL,
        "Value" TEXT NOT NULL,
        "Description" TEXT NOT NULL
    )
"#;

/// Key uniqueness is enforced by the engine, not by the store
pub const CREATE_KEY_INDEX: &str = r#"
    CREATE UNIQUE INDEX IF NOT EXISTS "IX_Settings_Key" ON "Settings" ("Key")
"#;

/// Statements run, in order, when a store is initialized
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_SETTINGS_TABLE, CREATE_KEY_INDEX];

pub(crate) const SELECT_ALL: &str =
    r#"SELECT "Id", "Key", "Value", "Description" FROM "Settings""#;

pub(crate) const SELECT_BY_KEY: &str =
    r#"SELECT "Id", "Key", "Value", "Description" FROM "Settings" WHERE "Key" = ?"#;

pub(crate) const INSERT_ENTRY: &str =
    r#"INSERT INTO "Settings" ("Key", "Value", "Description") VALUES (?, ?, ?)"#;

// The stored description is never replaced
pub(crate) const UPDATE_BY_KEY: &str = r#"UPDATE "Settings" SET "Value" = ? WHERE "Key" = ?"#;

pub(crate) const DELETE_BY_KEY: &str = r#"DELETE FROM "Settings" WHERE "Key" = ?"#;

pub(crate) const COUNT_ALL: &str = r#"SELECT COUNT(*) FROM "Settings""#;

pub(crate) const EXISTS_BY_KEY: &str =
    r#"SELECT EXISTS(SELECT 1 FROM "Settings" WHERE "Key" = ?)"#;
