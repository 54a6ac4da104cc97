//! Stored candidate cache with time-based invalidation.
//!
//! Entries are `{createdAt, candidates}` JSON blobs under a `cache:`-prefixed
//! key. Expiry happens on read against the injected clock; expired or
//! malformed entries are evicted and reported absent. There is no eviction
//! beyond the TTL: the quantized key space stays small.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::{KeyValueStore, KeyValueStoreError};
use crate::domain::Candidate;
use crate::domain::ports::{CandidateCache, CandidateCacheError, DiscoveryCacheKey};

const CACHE_TTL_HOURS: i64 = 24;
const KEY_PREFIX: &str = "cache:";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheEntry {
    created_at: DateTime<Utc>,
    candidates: Vec<Candidate>,
}

/// TTL cache over a key-value blob store.
pub struct StoredCandidateCache<S> {
    store: S,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
}

impl<S> StoredCandidateCache<S> {
    /// Build a cache with the standard 24-hour TTL.
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(store, clock, TimeDelta::hours(CACHE_TTL_HOURS))
    }

    /// Build a cache with an explicit TTL.
    pub fn with_ttl(store: S, clock: Arc<dyn Clock>, ttl: TimeDelta) -> Self {
        Self { store, clock, ttl }
    }

    fn storage_key(key: &DiscoveryCacheKey) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

#[async_trait]
impl<S> CandidateCache for StoredCandidateCache<S>
where
    S: KeyValueStore,
{
    async fn get(
        &self,
        key: &DiscoveryCacheKey,
    ) -> Result<Option<Vec<Candidate>>, CandidateCacheError> {
        let storage_key = Self::storage_key(key);
        let Some(blob) = self
            .store
            .get(&storage_key)
            .await
            .map_err(map_store_error)?
        else {
            return Ok(None);
        };

        let entry: CacheEntry = match serde_json::from_str(&blob) {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, key = %key, "malformed cache entry; evicting");
                // Eviction is best-effort: a failed delete still reads as a miss.
                let _ = self.store.remove(&storage_key).await;
                return Ok(None);
            }
        };

        if self.clock.utc() - entry.created_at > self.ttl {
            debug!(key = %key, "cache entry expired; evicting");
            let _ = self.store.remove(&storage_key).await;
            return Ok(None);
        }

        Ok(Some(entry.candidates))
    }

    async fn put(
        &self,
        key: &DiscoveryCacheKey,
        candidates: &[Candidate],
    ) -> Result<(), CandidateCacheError> {
        let entry = CacheEntry {
            created_at: self.clock.utc(),
            candidates: candidates.to_vec(),
        };
        let blob = serde_json::to_string(&entry)
            .map_err(|error| CandidateCacheError::serialization(error.to_string()))?;
        self.store
            .put(&Self::storage_key(key), &blob)
            .await
            .map_err(map_store_error)
    }
}

fn map_store_error(error: KeyValueStoreError) -> CandidateCacheError {
    CandidateCacheError::backend(error.to_string())
}
