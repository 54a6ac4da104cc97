//! Domain ports and supporting types for the hexagonal boundary.

mod cache_key;
mod candidate_cache;
mod geocoding_source;
mod place_source;
mod random_source;
mod session_store;
mod spin_observer;

pub use cache_key::DiscoveryCacheKey;
pub use candidate_cache::{CandidateCache, CandidateCacheError, FixtureCandidateCache};
pub use geocoding_source::{
    FixtureGeocodingSource, GeocodedPlace, GeocodingSource, GeocodingSourceError,
};
pub use place_source::{
    FixturePlaceSource, PlaceElement, PlaceQuery, PlaceSource, PlaceSourceError,
};
pub use random_source::{FixedRandomSource, RandomSource};
pub use session_store::{FixtureSessionSnapshotStore, SessionSnapshotStore, SessionStoreError};
pub use spin_observer::{NullSpinObserver, SpinObserver};

#[cfg(test)]
pub use candidate_cache::MockCandidateCache;
#[cfg(test)]
pub use geocoding_source::MockGeocodingSource;
#[cfg(test)]
pub use place_source::MockPlaceSource;
#[cfg(test)]
pub use session_store::MockSessionSnapshotStore;
