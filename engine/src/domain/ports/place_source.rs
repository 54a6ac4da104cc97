//! Driven port for fetching raw place elements from the POI provider.
//!
//! The domain owns the query shape and the raw element contract so discovery
//! orchestration stays adapter-agnostic. Tags are free-form: the provider
//! may omit any of them and the mapping layer decides what is usable.

use std::collections::BTreeMap;

use async_trait::async_trait;

/// Query scoping one provider fetch around a centre.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    /// Centre latitude in WGS84.
    pub latitude: f64,
    /// Centre longitude in WGS84.
    pub longitude: f64,
    /// Search radius around the centre, in metres.
    pub radius_meters: u32,
}

/// One raw tagged geo-element returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceElement {
    /// Provider element type (`node`, `way`, or `relation`).
    pub element_type: String,
    /// Raw provider element identifier.
    pub element_id: i64,
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Raw free-form tags; any tag may be missing.
    pub tags: BTreeMap<String, String>,
}

/// Errors surfaced while calling the place provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceSourceError {
    /// Network transport failed before receiving a response.
    #[error("place source transport failed: {message}")]
    Transport {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Provider call exceeded its timeout.
    #[error("place source timeout: {message}")]
    Timeout {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Provider rate-limited the request.
    #[error("place source rate limited request: {message}")]
    RateLimited {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Provider response could not be decoded.
    #[error("place source response decode failed: {message}")]
    Decode {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Adapter rejected the request before execution.
    #[error("place source request invalid: {message}")]
    InvalidRequest {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl PlaceSourceError {
    /// Construct a [`PlaceSourceError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct a [`PlaceSourceError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Construct a [`PlaceSourceError::RateLimited`].
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Construct a [`PlaceSourceError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Construct a [`PlaceSourceError::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

/// Port for querying the provider for place elements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Fetch all elements matching one query.
    async fn fetch_places(
        &self,
        query: &PlaceQuery,
    ) -> Result<Vec<PlaceElement>, PlaceSourceError>;
}

/// Fixture implementation returning no elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixturePlaceSource;

#[async_trait]
impl PlaceSource for FixturePlaceSource {
    async fn fetch_places(
        &self,
        _query: &PlaceQuery,
    ) -> Result<Vec<PlaceElement>, PlaceSourceError> {
        Ok(Vec::new())
    }
}
