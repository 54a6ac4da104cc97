//! Unit tests for discovery orchestration.

use std::collections::BTreeMap;
use std::sync::Arc;

use rstest::rstest;

use super::{DiscoveryConfig, DiscoveryService};
use crate::domain::ports::{
    CandidateCacheError, FixedRandomSource, MockCandidateCache, MockPlaceSource, PlaceElement,
    PlaceSourceError,
};
use crate::domain::{Candidate, Location, WalkBudget, example_data};

fn default_center() -> Location {
    example_data::default_location()
}

fn far_away() -> Location {
    Location::new(51.5074, -0.1278, "London")
}

fn named_element(id: i64, name: &str, cuisine: &str) -> PlaceElement {
    let mut tags = BTreeMap::new();
    tags.insert("name".to_owned(), name.to_owned());
    tags.insert("cuisine".to_owned(), cuisine.to_owned());
    tags.insert("amenity".to_owned(), "restaurant".to_owned());
    PlaceElement {
        element_type: "node".to_owned(),
        element_id: id,
        latitude: 37.4845,
        longitude: 127.0165,
        tags,
    }
}

fn cached_candidate(id: &str, category: &str) -> Candidate {
    Candidate {
        id: id.to_owned(),
        name: format!("cached {id}"),
        category: category.to_owned(),
        latitude: 37.4845,
        longitude: 127.0165,
        distance_meters: 52.0,
        walk_minutes: 1,
        rating: 4.0,
    }
}

fn service(source: MockPlaceSource, cache: MockCandidateCache) -> DiscoveryService {
    DiscoveryService::new(
        Arc::new(source),
        Arc::new(cache),
        Arc::new(FixedRandomSource::new(0.5)),
    )
}

#[rstest]
#[tokio::test]
async fn cache_hit_skips_the_provider() {
    let source = MockPlaceSource::new();
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| {
        Ok(Some(vec![
            cached_candidate("node/1", "Korean"),
            cached_candidate("node/2", "Japanese"),
        ]))
    });

    let outcome = service(source, cache)
        .load(&default_center(), WalkBudget::Ten)
        .await;

    assert_eq!(outcome.candidates.len(), 2);
    assert_eq!(outcome.categories, vec!["Japanese", "Korean"]);
}

#[rstest]
#[tokio::test]
async fn cache_miss_fetches_maps_and_stores() {
    let mut source = MockPlaceSource::new();
    source.expect_fetch_places().times(1).returning(|_| {
        Ok(vec![
            named_element(1, "맛있는 김치찌개", "korean"),
            named_element(2, "스시 마이", "japanese"),
        ])
    });
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));
    cache
        .expect_put()
        .times(1)
        .withf(|key, candidates| key.as_str().starts_with("800_") && candidates.len() == 2)
        .returning(|_, _| Ok(()));

    let outcome = service(source, cache)
        .load(&default_center(), WalkBudget::Ten)
        .await;

    assert_eq!(outcome.candidates.len(), 2);
    assert_eq!(outcome.categories, vec!["japanese", "korean"]);
}

#[rstest]
#[tokio::test]
async fn cache_read_failure_counts_as_a_miss() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Ok(vec![named_element(1, "효령 파스타", "italian")]));
    let mut cache = MockCandidateCache::new();
    cache
        .expect_get()
        .times(1)
        .returning(|_| Err(CandidateCacheError::backend("store offline")));
    cache.expect_put().times(1).returning(|_, _| Ok(()));

    let outcome = service(source, cache)
        .load(&far_away(), WalkBudget::Ten)
        .await;

    assert_eq!(outcome.candidates.len(), 1);
}

#[rstest]
#[tokio::test]
async fn provider_failure_far_from_default_yields_nothing() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Err(PlaceSourceError::transport("connection refused")));
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));

    let outcome = service(source, cache)
        .load(&far_away(), WalkBudget::Ten)
        .await;

    assert!(outcome.candidates.is_empty());
    assert!(outcome.categories.is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_fetch_near_default_substitutes_demo_data() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));

    let outcome = service(source, cache)
        .load(&default_center(), WalkBudget::Five)
        .await;

    assert!(!outcome.candidates.is_empty());
    assert!(
        outcome
            .candidates
            .iter()
            .all(|candidate| candidate.walk_minutes <= 5),
        "demo fallback must respect the walk budget"
    );
}

#[rstest]
#[tokio::test]
async fn demo_fallback_applies_within_tolerance_of_default() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));

    let anchor = default_center();
    let nearby = Location::new(
        anchor.latitude + 0.005,
        anchor.longitude - 0.005,
        "다른 입구",
    );
    let outcome = service(source, cache).load(&nearby, WalkBudget::Fifteen).await;

    assert!(!outcome.candidates.is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_fetch_results_are_not_cached() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));
    // No put expectation: a write would panic the mock.

    let outcome = service(source, cache)
        .load(&far_away(), WalkBudget::Ten)
        .await;

    assert!(outcome.candidates.is_empty());
}

#[rstest]
#[tokio::test]
async fn cache_write_failure_is_swallowed() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Ok(vec![named_element(1, "버거 킹덤", "burger")]));
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));
    cache
        .expect_put()
        .times(1)
        .returning(|_, _| Err(CandidateCacheError::backend("disk full")));

    let outcome = service(source, cache)
        .load(&far_away(), WalkBudget::Ten)
        .await;

    assert_eq!(outcome.candidates.len(), 1);
}

#[rstest]
#[tokio::test]
async fn custom_config_moves_the_fallback_anchor() {
    let mut source = MockPlaceSource::new();
    source
        .expect_fetch_places()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    let mut cache = MockCandidateCache::new();
    cache.expect_get().times(1).returning(|_| Ok(None));

    let config = DiscoveryConfig {
        default_location: far_away(),
        fallback_tolerance_degrees: 0.01,
    };
    let service = DiscoveryService::with_config(
        Arc::new(source),
        Arc::new(cache),
        Arc::new(FixedRandomSource::new(0.5)),
        config,
    );

    let outcome = service.load(&far_away(), WalkBudget::Fifteen).await;
    assert!(!outcome.candidates.is_empty());
}
