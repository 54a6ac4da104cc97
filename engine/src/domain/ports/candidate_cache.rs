//! Port interface for caching discovery results.
//!
//! The cache is a pure performance optimization and never a system of
//! record: the discovery service treats every error from this port as a
//! miss, so correctness must never depend on cache availability.

use async_trait::async_trait;

use crate::domain::Candidate;

use super::DiscoveryCacheKey;

/// Errors surfaced by the caching adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateCacheError {
    /// Cache backend is unavailable or timing out.
    #[error("candidate cache backend failure: {message}")]
    Backend {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Serialisation or deserialisation of cached content failed.
    #[error("candidate cache serialisation failed: {message}")]
    Serialization {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl CandidateCacheError {
    /// Construct a [`CandidateCacheError::Backend`].
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Construct a [`CandidateCacheError::Serialization`].
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Port for candidate list caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateCache: Send + Sync {
    /// Read a cached candidate list for the given key.
    ///
    /// Expired or unreadable entries are reported absent, not as errors.
    async fn get(
        &self,
        key: &DiscoveryCacheKey,
    ) -> Result<Option<Vec<Candidate>>, CandidateCacheError>;

    /// Store a candidate list under the supplied key.
    async fn put(
        &self,
        key: &DiscoveryCacheKey,
        candidates: &[Candidate],
    ) -> Result<(), CandidateCacheError>;
}

/// Fixture cache that always misses and discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCandidateCache;

#[async_trait]
impl CandidateCache for FixtureCandidateCache {
    async fn get(
        &self,
        _key: &DiscoveryCacheKey,
    ) -> Result<Option<Vec<Candidate>>, CandidateCacheError> {
        Ok(None)
    }

    async fn put(
        &self,
        _key: &DiscoveryCacheKey,
        _candidates: &[Candidate],
    ) -> Result<(), CandidateCacheError> {
        Ok(())
    }
}
