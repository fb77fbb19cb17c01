// ABOUTME: Settings store backed by a local SQLite file
// ABOUTME: Load, add, update and delete operations with one connection per call

use std::path::{Path, PathBuf};
use std::time::Duration;

use setkeep_core::{
    data_dir, normalize_database_name, FromSettingValue, SettingsEntry, ToSettingValue,
    DEFAULT_DATABASE_NAME,
};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::error::DatabaseError;
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, warn};

use crate::error::{StorageError, StorageResult};
use crate::model::SettingsRow;
use crate::schema;

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub directory: PathBuf,
    pub name: String,
    pub enable_wal: bool,
    pub busy_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            directory: data_dir(),
            name: DEFAULT_DATABASE_NAME.to_string(),
            enable_wal: true,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl StoreConfig {
    /// Configuration for the named database in the default directory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn with_wal(mut self, enable_wal: bool) -> Self {
        self.enable_wal = enable_wal;
        self
    }

    /// Full path of the database file, with the `.db` extension applied
    pub fn database_path(&self) -> PathBuf {
        self.directory.join(normalize_database_name(&self.name))
    }
}

/// File-backed settings store.
///
/// No connection is kept between calls: every operation opens the database,
/// does its work and closes the connection again, so every load reflects the
/// file at call time.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SettingsStore {
    /// Open the named store in the default directory, creating it if needed
    pub async fn open(name: &str) -> StorageResult<Self> {
        Self::initialize(StoreConfig::new(name)).await
    }

    /// Ensure the database file and schema exist. Safe to call repeatedly.
    pub async fn initialize(config: StoreConfig) -> StorageResult<Self> {
        let path = config.database_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut options = SqliteConnectOptions::new()
            .filename(&path)
            .busy_timeout(config.busy_timeout);
        if config.enable_wal {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // Only initialization may create the file; later calls expect the schema
        let mut conn = options
            .clone()
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|source| StorageError::Unavailable {
                path: path.clone(),
                source,
            })?;

        for statement in schema::SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&mut conn).await?;
        }
        conn.close().await?;

        info!("Settings store ready at {}", path.display());
        Ok(Self { path, options })
    }

    /// Path of the backing database file
    pub fn database_path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> StorageResult<SqliteConnection> {
        debug!("Opening settings database at {}", self.path.display());
        self.options
            .connect()
            .await
            .map_err(|source| StorageError::Unavailable {
                path: self.path.clone(),
                source,
            })
    }

    /// Load every entry. Order is unspecified.
    pub async fn load_all(&self) -> StorageResult<Vec<SettingsEntry>> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, SettingsRow>(schema::SELECT_ALL)
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        Ok(rows.into_iter().map(SettingsRow::into_entry).collect())
    }

    /// Load the entry stored under `key`
    pub async fn load_entry(&self, key: i64) -> StorageResult<Option<SettingsEntry>> {
        let mut conn = self.connect().await?;
        let row = sqlx::query_as::<_, SettingsRow>(schema::SELECT_BY_KEY)
            .bind(key)
            .fetch_optional(&mut conn)
            .await?;
        conn.close().await?;

        Ok(row.map(SettingsRow::into_entry))
    }

    /// Load the raw text value stored under `key`
    pub async fn load_value(&self, key: i64) -> StorageResult<Option<String>> {
        Ok(self.load_entry(key).await?.map(|entry| entry.value))
    }

    /// Load the value stored under `key` and parse it as `T`.
    ///
    /// A missing key yields `Ok(None)`; text that does not parse as `T` yields
    /// [`StorageError::TypeCoercion`].
    pub async fn load_typed<T: FromSettingValue>(&self, key: i64) -> StorageResult<Option<T>> {
        match self.load_value(key).await? {
            Some(raw) => T::from_setting_value(&raw)
                .map(Some)
                .map_err(|source| StorageError::TypeCoercion { key, source }),
            None => Ok(None),
        }
    }

    /// Number of stored entries
    pub async fn count(&self) -> StorageResult<i64> {
        let mut conn = self.connect().await?;
        let count = sqlx::query_scalar::<_, i64>(schema::COUNT_ALL)
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;

        Ok(count)
    }

    /// Whether an entry exists under `key`
    pub async fn contains_key(&self, key: i64) -> StorageResult<bool> {
        let mut conn = self.connect().await?;
        let exists = sqlx::query_scalar::<_, i64>(schema::EXISTS_BY_KEY)
            .bind(key)
            .fetch_one(&mut conn)
            .await?;
        conn.close().await?;

        Ok(exists != 0)
    }

    /// Persist a new entry and return it with the assigned id.
    ///
    /// Any id on the incoming entry is discarded. Fails with
    /// [`StorageError::KeyConflict`] when the key is already in use, leaving the
    /// existing entry untouched.
    pub async fn add_entry(&self, mut entry: SettingsEntry) -> StorageResult<SettingsEntry> {
        entry.id = 0;
        let row = SettingsRow::from_entry(&entry);

        let mut conn = self.connect().await?;
        let result = sqlx::query(schema::INSERT_ENTRY)
            .bind(row.key)
            .bind(&row.value)
            .bind(&row.description)
            .execute(&mut conn)
            .await;

        let outcome = match result {
            Ok(done) => {
                let inserted = SettingsRow {
                    id: done.last_insert_rowid(),
                    ..row
                };
                debug!("Added settings entry {} with id {}", inserted.key, inserted.id);
                Ok(inserted.into_entry())
            }
            Err(sqlx::Error::Database(db_err)) if is_unique_violation(&*db_err) => {
                warn!("Settings key {} is already in use", row.key);
                Err(StorageError::KeyConflict(row.key))
            }
            Err(e) => Err(StorageError::Sqlx(e)),
        };

        settle(outcome, conn.close().await)
    }

    /// Persist a new entry from its parts
    pub async fn add(
        &self,
        key: i64,
        value: &str,
        description: &str,
    ) -> StorageResult<SettingsEntry> {
        self.add_entry(SettingsEntry::new(key, value, description))
            .await
    }

    /// Persist a new entry, storing `value` in its canonical text form
    pub async fn add_typed<T>(
        &self,
        key: i64,
        value: &T,
        description: &str,
    ) -> StorageResult<SettingsEntry>
    where
        T: ToSettingValue + ?Sized,
    {
        self.add_entry(SettingsEntry::new(key, value.to_setting_value(), description))
            .await
    }

    /// Update the value of the entry matching `entry.key`. The id is ignored.
    ///
    /// Does nothing when no entry has the key. Only the value is written: the
    /// stored description always wins, so `entry.description` is never
    /// applied, even when the stored description is empty. This mirrors the
    /// behavior existing databases were written under and looks like a latent
    /// defect; change it only together with its callers.
    pub async fn update_entry(&self, entry: &SettingsEntry) -> StorageResult<()> {
        let row = SettingsRow::from_entry(entry);

        let mut conn = self.connect().await?;
        let result = sqlx::query(schema::UPDATE_BY_KEY)
            .bind(&row.value)
            .bind(row.key)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        if result.rows_affected() == 0 {
            debug!("No settings entry with key {}, nothing updated", row.key);
        } else {
            debug!("Updated settings entry {}", row.key);
        }

        Ok(())
    }

    /// Update the value under `key`. `description` is accepted for symmetry
    /// with [`SettingsStore::add`] and is not written; see
    /// [`SettingsStore::update_entry`].
    pub async fn update(&self, key: i64, value: &str, description: &str) -> StorageResult<()> {
        self.update_entry(&SettingsEntry::new(key, value, description))
            .await
    }

    /// Delete the entry matching `entry.key`. The id is ignored.
    pub async fn delete_entry(&self, entry: &SettingsEntry) -> StorageResult<()> {
        self.delete(entry.key).await
    }

    /// Delete the entry under `key`. Does nothing when the key is absent.
    pub async fn delete(&self, key: i64) -> StorageResult<()> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(schema::DELETE_BY_KEY)
            .bind(key)
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        if result.rows_affected() > 0 {
            debug!("Deleted settings entry {}", key);
        }

        Ok(())
    }
}

/// Combine an operation outcome with the result of closing its connection.
///
/// A close failure only surfaces when the operation itself succeeded.
fn settle<T>(outcome: StorageResult<T>, closed: Result<(), sqlx::Error>) -> StorageResult<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(StorageError::Sqlx(close_err)),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("Failed to close settings database: {}", close_err);
            Err(e)
        }
    }
}

/// SQLite UNIQUE constraint violation (SQLITE_CONSTRAINT_UNIQUE or _PRIMARYKEY)
fn is_unique_violation(err: &dyn DatabaseError) -> bool {
    matches!(err.code().as_deref(), Some("2067") | Some("1555"))
}
