//! Free-text address search.
//!
//! Thin fail-open wrapper over the geocoding port: short queries and
//! provider failures both map to an empty result, never an error.

use std::sync::Arc;

use tracing::warn;

use super::Location;
use super::ports::GeocodingSource;

/// Minimum query length before the provider is consulted.
const MIN_QUERY_LENGTH: usize = 2;
/// Maximum number of locations returned per search.
const RESULT_LIMIT: u32 = 5;

/// Address search service over the geocoding port.
pub struct GeocodingService {
    source: Arc<dyn GeocodingSource>,
}

impl GeocodingService {
    /// Build a service over a geocoding source.
    pub fn new(source: Arc<dyn GeocodingSource>) -> Self {
        Self { source }
    }

    /// Search for locations matching a free-text query.
    ///
    /// Queries shorter than two characters return nothing without touching
    /// the provider; provider failures degrade to an empty result.
    pub async fn search(&self, query: &str) -> Vec<Location> {
        let trimmed = query.trim();
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Vec::new();
        }

        match self.source.search(trimmed, RESULT_LIMIT).await {
            Ok(places) => places
                .into_iter()
                .map(|place| Location::new(place.latitude, place.longitude, place.display_name))
                .collect(),
            Err(error) => {
                warn!(%error, "address search failed; returning no locations");
                Vec::new()
            }
        }
    }
}
