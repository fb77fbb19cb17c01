use setkeep_config::constants::SETKEEP_DATA_DIR;
use std::env;
use std::path::PathBuf;

/// Database file used when no name is supplied
pub const DEFAULT_DATABASE_NAME: &str = "Settings.db";

/// Extension appended to database names that lack it
pub const DATABASE_EXTENSION: &str = ".db";

/// Get the directory holding settings databases
///
/// Resolution order: `SETKEEP_DATA_DIR`, the directory of the running
/// executable, then the current directory.
pub fn data_dir() -> PathBuf {
    // Environment override first (useful for tests and packaging)
    if let Ok(dir) = env::var(SETKEEP_DATA_DIR) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
