//! Driven port for free-text address geocoding.

use async_trait::async_trait;

/// One geocoded place returned for a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Human-readable display name.
    pub display_name: String,
}

/// Errors surfaced while calling the geocoding provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeocodingSourceError {
    /// Network transport failed before receiving a response.
    #[error("geocoding transport failed: {message}")]
    Transport {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// Provider response could not be decoded.
    #[error("geocoding response decode failed: {message}")]
    Decode {
        /// Adapter-provided failure detail.
        message: String,
    },
}

impl GeocodingSourceError {
    /// Construct a [`GeocodingSourceError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Construct a [`GeocodingSourceError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for querying the geocoding provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingSource: Send + Sync {
    /// Search for locations matching a free-text query.
    async fn search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<GeocodedPlace>, GeocodingSourceError>;
}

/// Fixture implementation returning no matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGeocodingSource;

#[async_trait]
impl GeocodingSource for FixtureGeocodingSource {
    async fn search(
        &self,
        _query: &str,
        _limit: u32,
    ) -> Result<Vec<GeocodedPlace>, GeocodingSourceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_source_returns_no_matches() {
        let source = FixtureGeocodingSource;
        let places = source.search("효령로", 5).await.expect("fixture search");
        assert!(places.is_empty());
    }
}
