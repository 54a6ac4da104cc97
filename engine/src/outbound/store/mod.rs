//! Key-value blob stores backing the cache and session adapters.
//!
//! Two namespaces share one store: `cache:`-prefixed discovery entries and
//! the fixed session snapshot key. Operations are atomic per key.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

mod json_file;

pub use json_file::JsonFileStore;

/// Errors raised by key-value store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyValueStoreError {
    /// The backing medium rejected the operation.
    #[error("key-value store backend failure: {message}")]
    Backend {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl KeyValueStoreError {
    /// Construct a [`KeyValueStoreError::Backend`].
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Minimal key-value blob store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Store `value` under `key`, replacing any previous blob.
    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Remove the blob stored under `key`, if any.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

/// Mutex-guarded in-memory store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        Ok(self.lock_entries().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        self.lock_entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        self.lock_entries().remove(key);
        Ok(())
    }
}
