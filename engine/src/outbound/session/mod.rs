//! Stored session snapshot adapter.
//!
//! The snapshot lives under one fixed key in the store namespace. Corrupt
//! snapshots are reported absent so a bad write can never wedge a restart.

use async_trait::async_trait;
use tracing::warn;

use super::store::{KeyValueStore, KeyValueStoreError};
use crate::domain::SessionSnapshot;
use crate::domain::ports::{SessionSnapshotStore, SessionStoreError};

const SESSION_KEY: &str = "session:lunch-roulette";

/// Session snapshot store over a key-value blob store.
pub struct StoredSessionStore<S> {
    store: S,
}

impl<S> StoredSessionStore<S> {
    /// Build a snapshot store over a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SessionSnapshotStore for StoredSessionStore<S>
where
    S: KeyValueStore,
{
    async fn load(&self) -> Result<Option<SessionSnapshot>, SessionStoreError> {
        let Some(blob) = self
            .store
            .get(SESSION_KEY)
            .await
            .map_err(map_store_error)?
        else {
            return Ok(None);
        };

        match serde_json::from_str(&blob) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(error) => {
                warn!(%error, "corrupt session snapshot; treating as absent");
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        let blob = serde_json::to_string(snapshot)
            .map_err(|error| SessionStoreError::serialization(error.to_string()))?;
        self.store
            .put(SESSION_KEY, &blob)
            .await
            .map_err(map_store_error)
    }
}

fn map_store_error(error: KeyValueStoreError) -> SessionStoreError {
    SessionStoreError::backend(error.to_string())
}
