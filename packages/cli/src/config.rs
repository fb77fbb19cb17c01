use setkeep_config::constants::{SETKEEP_BUSY_TIMEOUT_SECS, SETKEEP_DB_NAME};
use setkeep_core::{data_dir, DEFAULT_DATABASE_NAME};
use setkeep_storage::StoreConfig;
use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Database the demo writes to, kept apart from the user's settings
pub const DEMO_DATABASE_NAME: &str = "ZimLabs.Settings";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid busy timeout: {0}")]
    InvalidBusyTimeout(#[from] ParseIntError),
    #[error("Busy timeout must be at least 1 second")]
    BusyTimeoutTooShort,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub database_name: String,
    pub busy_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_name =
            env::var(SETKEEP_DB_NAME).unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

        let busy_timeout_secs = env::var(SETKEEP_BUSY_TIMEOUT_SECS)
            .unwrap_or_else(|_| "5".to_string())
            .trim()
            .parse::<u64>()?;

        if busy_timeout_secs == 0 {
            return Err(ConfigError::BusyTimeoutTooShort);
        }

        Ok(Config {
            data_dir: data_dir(),
            database_name,
            busy_timeout: Duration::from_secs(busy_timeout_secs),
        })
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, name: Option<String>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(name) = name {
            self.database_name = name;
        }
        self
    }

    /// Directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("log")
    }

    /// Store used by the demo: same directory, its own database file
    pub fn demo_store_config(&self) -> StoreConfig {
        StoreConfig::new(DEMO_DATABASE_NAME)
            .with_directory(self.data_dir.clone())
            .with_busy_timeout(self.busy_timeout)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.database_name.clone())
            .with_directory(self.data_dir.clone())
            .with_busy_timeout(self.busy_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(SETKEEP_DB_NAME);
        env::remove_var(SETKEEP_BUSY_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_name, "Settings.db");
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        env::set_var(SETKEEP_DB_NAME, "App.Settings");
        env::set_var(SETKEEP_BUSY_TIMEOUT_SECS, "12");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_name, "App.Settings");
        assert_eq!(config.busy_timeout, Duration::from_secs(12));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_rejects_invalid_timeout() {
        clear_env();
        env::set_var(SETKEEP_BUSY_TIMEOUT_SECS, "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBusyTimeout(_))
        ));

        env::set_var(SETKEEP_BUSY_TIMEOUT_SECS, "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::BusyTimeoutTooShort)
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_and_store_config() {
        clear_env();

        let config = Config::from_env()
            .unwrap()
            .with_overrides(Some(PathBuf::from("/tmp/setkeep")), Some("Demo".to_string()));

        let store_config = config.store_config();
        assert_eq!(
            store_config.database_path(),
            PathBuf::from("/tmp/setkeep/Demo.db")
        );
        assert_eq!(store_config.busy_timeout, Duration::from_secs(5));

        // The demo never shares the user's database file
        assert_eq!(
            config.demo_store_config().database_path(),
            PathBuf::from("/tmp/setkeep/ZimLabs.Settings.db")
        );
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/setkeep/log"));
    }
}
