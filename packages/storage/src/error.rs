use setkeep_core::CoercionError;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings database unavailable at {}: {}", .path.display(), .source)]
    Unavailable {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Key already in use: {0}")]
    KeyConflict(i64),
    #[error("Value of key {key} has the wrong type: {source}")]
    TypeCoercion {
        key: i64,
        #[source]
        source: CoercionError,
    },
}

impl StorageError {
    /// Whether the failure came from the backing file rather than the data
    pub fn is_io(&self) -> bool {
        matches!(self, StorageError::Io(_) | StorageError::Unavailable { .. })
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
