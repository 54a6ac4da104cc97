//! Single-document JSON file store.
//!
//! The whole map lives in one JSON document. Writes go through a temporary
//! file followed by a rename so a crash cannot leave a torn document; an
//! unreadable or corrupt document degrades to an empty store on open.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use super::{KeyValueStore, KeyValueStoreError};

/// File-backed key-value store.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any existing document.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(%error, path = %path.display(), "corrupt store document; starting empty");
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => {
                warn!(%error, path = %path.display(), "unreadable store document; starting empty");
                HashMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), KeyValueStoreError> {
        let document = serde_json::to_string_pretty(entries)
            .map_err(|error| KeyValueStoreError::backend(error.to_string()))?;

        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, document)
            .await
            .map_err(|error| KeyValueStoreError::backend(error.to_string()))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|error| KeyValueStoreError::backend(error.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        self.persist(&entries).await
    }
}
