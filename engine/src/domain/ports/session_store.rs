//! Port for session snapshot persistence.
//!
//! The snapshot is the only state that survives a process restart: last
//! winner, walk budget, zoomed flag, location, and category filter.
//! Candidate lists and cache entries are re-derived through discovery and
//! are never part of the snapshot.

use async_trait::async_trait;

use crate::domain::SessionSnapshot;

/// Errors raised by session snapshot store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// Store backend is unavailable.
    #[error("session store backend failure: {message}")]
    Backend {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Snapshot serialisation failed.
    #[error("session store serialisation failed: {message}")]
    Serialization {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl SessionStoreError {
    /// Construct a [`SessionStoreError::Backend`].
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Construct a [`SessionStoreError::Serialization`].
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Port for storing and retrieving the persisted session subset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionSnapshotStore: Send + Sync {
    /// Load the stored snapshot.
    ///
    /// Returns `None` when no snapshot has been saved yet; adapters also
    /// report corrupt snapshots as absent rather than erroring.
    async fn load(&self) -> Result<Option<SessionSnapshot>, SessionStoreError>;

    /// Save a snapshot, replacing any previous one.
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError>;
}

/// Fixture store that holds nothing and discards saves.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSessionSnapshotStore;

#[async_trait]
impl SessionSnapshotStore for FixtureSessionSnapshotStore {
    async fn load(&self) -> Result<Option<SessionSnapshot>, SessionStoreError> {
        Ok(None)
    }

    async fn save(&self, _snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        Ok(())
    }
}
