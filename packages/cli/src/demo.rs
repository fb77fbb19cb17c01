// ABOUTME: Demonstration scenario for the settings store
// ABOUTME: Exercises add, typed reads, listing, deletion and a key conflict

use crate::config::Config;
use setkeep_storage::{SettingsEntry, SettingsStore, StorageError, StorageResult};
use tracing::{info, warn};

/// Keys written by the demo
pub const DEMO_KEYS: [i64; 3] = [1, 2, 3];

fn log_entries(entries: &[SettingsEntry]) {
    for entry in entries {
        info!(
            "Id {}, Key {}, Value {}, Description: {}",
            entry.id, entry.key, entry.value, entry.description
        );
    }
}

/// Run the demo in its own database next to the configured one
pub async fn run_demo_for(config: &Config) -> StorageResult<Vec<SettingsEntry>> {
    let store = SettingsStore::initialize(config.demo_store_config()).await?;
    info!("Demo database: {}", store.database_path().display());
    run_demo(&store).await
}

/// Run the demo against `store`, returning the entries left at the end.
///
/// Deletes and rewrites keys 1 to 3, so `store` must be dedicated to the demo.
pub async fn run_demo(store: &SettingsStore) -> StorageResult<Vec<SettingsEntry>> {
    // Start from a clean slate so the demo can be repeated on the same file
    for key in DEMO_KEYS {
        store.delete(key).await?;
    }

    info!("Add an entry");
    store.add(1, "SomeValue", "Some description").await?;

    let first = store.load_entry(1).await?;
    if let Some(entry) = &first {
        info!(
            "Value loaded: Id {}, Key {}, Value {}, Description: {}",
            entry.id, entry.key, entry.value, entry.description
        );
    }

    info!("Add another value");
    // The stale id is discarded by the store
    let second = store
        .add_entry(SettingsEntry {
            id: 1,
            key: 2,
            value: "10".to_string(),
            description: "Some description".to_string(),
        })
        .await?;
    info!("Id of the entry: {}", second.id);

    let number = store.load_typed::<i32>(2).await?;
    info!("Value loaded. Value: {:?}", number);

    store.add_typed(3, &true, "Some bool value...").await?;
    info!("Add a third value");

    log_entries(&store.load_all().await?);

    if let Some(entry) = &first {
        info!("Delete first value");
        store.delete_entry(entry).await?;
    }

    let remaining = store.load_all().await?;
    log_entries(&remaining);

    // Key 2 is still in use, so this has to be rejected
    match store.add(2, "10", "Some description").await {
        Err(StorageError::KeyConflict(key)) => {
            warn!("Key {} is already in use, entry not added", key)
        }
        Err(e) => return Err(e),
        Ok(entry) => warn!("Duplicate key {} was accepted", entry.key),
    }

    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use setkeep_storage::StoreConfig;

    #[tokio::test]
    async fn test_demo_leaves_two_entries() {
        let temp = tempfile::tempdir().unwrap();
        let store = SettingsStore::initialize(
            StoreConfig::new("ZimLabs.Settings").with_directory(temp.path()),
        )
        .await
        .unwrap();

        let remaining = run_demo(&store).await.unwrap();

        let mut keys: Vec<i64> = remaining.iter().map(|e| e.key).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec![2, 3]);
        assert_eq!(store.load_typed::<bool>(3).await.unwrap(), Some(true));
        assert_eq!(store.load_entry(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_demo_can_run_twice_on_same_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = SettingsStore::initialize(
            StoreConfig::new("ZimLabs.Settings").with_directory(temp.path()),
        )
        .await
        .unwrap();

        run_demo(&store).await.unwrap();
        let remaining = run_demo(&store).await.unwrap();

        assert_eq!(remaining.len(), 2);
    }

    #[tokio::test]
    async fn test_demo_keeps_user_settings_intact() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: temp.path().to_path_buf(),
            database_name: "Settings.db".to_string(),
            busy_timeout: std::time::Duration::from_secs(5),
        };

        let user_store = SettingsStore::initialize(config.store_config())
            .await
            .unwrap();
        user_store.add(1, "user-owned", "mine").await.unwrap();
        user_store.add(2, "42", "also mine").await.unwrap();

        let remaining = run_demo_for(&config).await.unwrap();
        assert_eq!(remaining.len(), 2);

        let first = user_store.load_entry(1).await.unwrap().unwrap();
        assert_eq!(first.value, "user-owned");
        assert_eq!(first.description, "mine");
        assert_eq!(user_store.load_typed::<i32>(2).await.unwrap(), Some(42));
        assert_eq!(user_store.count().await.unwrap(), 2);
    }
}
