//! Discovery orchestration: cache lookup, provider fetch, demo fallback.
//!
//! This service never fails. Cache errors count as misses, provider errors
//! degrade to an empty candidate list, and the only fabricated data is the
//! demo fallback for centres near the built-in default location.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{
    CandidateCache, DiscoveryCacheKey, PlaceQuery, PlaceSource, RandomSource,
};
use crate::domain::{Candidate, Location, WalkBudget, example_data};

mod mapping;

#[cfg(test)]
mod tests;

/// Configuration for the demo fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryConfig {
    /// Location the demo dataset is anchored to.
    pub default_location: Location,
    /// Maximum per-axis distance in degrees for the fallback to apply
    /// (0.01° is roughly 1.1 km).
    pub fallback_tolerance_degrees: f64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            default_location: example_data::default_location(),
            fallback_tolerance_degrees: 0.01,
        }
    }
}

/// Result of one discovery load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoveryOutcome {
    /// Candidates for the requested centre and radius.
    pub candidates: Vec<Candidate>,
    /// Sorted distinct category labels across `candidates`.
    pub categories: Vec<String>,
}

/// Orchestrates candidate discovery over the cache and place source ports.
pub struct DiscoveryService {
    source: Arc<dyn PlaceSource>,
    cache: Arc<dyn CandidateCache>,
    random: Arc<dyn RandomSource>,
    config: DiscoveryConfig,
}

impl DiscoveryService {
    /// Build a service with the default fallback configuration.
    pub fn new(
        source: Arc<dyn PlaceSource>,
        cache: Arc<dyn CandidateCache>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self::with_config(source, cache, random, DiscoveryConfig::default())
    }

    /// Build a service with an explicit fallback configuration.
    pub fn with_config(
        source: Arc<dyn PlaceSource>,
        cache: Arc<dyn CandidateCache>,
        random: Arc<dyn RandomSource>,
        config: DiscoveryConfig,
    ) -> Self {
        Self {
            source,
            cache,
            random,
            config,
        }
    }

    /// Load candidates and their category set for a centre and walk budget.
    ///
    /// Never fails: every internal failure degrades to an empty candidate
    /// list, which the caller may re-trigger on the next parameter change.
    pub async fn load(&self, center: &Location, budget: WalkBudget) -> DiscoveryOutcome {
        let key =
            DiscoveryCacheKey::quantize(budget.radius_meters(), center.latitude, center.longitude);

        let cached = match self.cache.get(&key).await {
            Ok(hit) => hit,
            Err(error) => {
                warn!(%error, key = %key, "candidate cache read failed; treating as miss");
                None
            }
        };

        let mut candidates = match cached {
            Some(candidates) => {
                debug!(key = %key, count = candidates.len(), "discovery served from cache");
                candidates
            }
            None => self.fetch_and_cache(center, budget, &key).await,
        };

        if candidates.is_empty() && self.near_default_location(center) {
            candidates = demo_fallback(budget);
            debug!(
                count = candidates.len(),
                "substituting demo dataset near the default location"
            );
        }

        let categories = distinct_categories(&candidates);
        DiscoveryOutcome {
            candidates,
            categories,
        }
    }

    async fn fetch_and_cache(
        &self,
        center: &Location,
        budget: WalkBudget,
        key: &DiscoveryCacheKey,
    ) -> Vec<Candidate> {
        let query = PlaceQuery {
            latitude: center.latitude,
            longitude: center.longitude,
            radius_meters: budget.radius_meters(),
        };

        let candidates = match self.source.fetch_places(&query).await {
            Ok(elements) => {
                mapping::candidates_from_elements(center, elements, self.random.as_ref())
            }
            Err(error) => {
                warn!(%error, "place fetch failed; returning no candidates");
                Vec::new()
            }
        };

        // Empty batches are not cached so the next trigger retries the
        // provider instead of pinning a bad result for a day.
        if !candidates.is_empty() {
            if let Err(error) = self.cache.put(key, &candidates).await {
                warn!(%error, key = %key, "candidate cache write failed; continuing uncached");
            }
        }

        candidates
    }

    fn near_default_location(&self, center: &Location) -> bool {
        let anchor = &self.config.default_location;
        (center.latitude - anchor.latitude).abs() < self.config.fallback_tolerance_degrees
            && (center.longitude - anchor.longitude).abs() < self.config.fallback_tolerance_degrees
    }
}

fn demo_fallback(budget: WalkBudget) -> Vec<Candidate> {
    example_data::demo_candidates()
        .into_iter()
        .filter(|candidate| candidate.walk_minutes <= budget.minutes())
        .collect()
}

fn distinct_categories(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| candidate.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
