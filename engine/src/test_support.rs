//! Shared test doubles for engine unit tests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{
    PlaceElement, PlaceQuery, PlaceSource, PlaceSourceError, RandomSource, SessionSnapshotStore,
    SessionStoreError, SpinObserver,
};
use crate::domain::selection::SpinSleeper;
use crate::domain::{Candidate, SessionSnapshot};

/// Clock whose time only moves when a test advances it.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => panic!("failed to convert Duration to TimeDelta: {error}"),
        };
        *self.lock_clock() += delta;
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Sleeper that returns immediately, keeping spin tests synchronous.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateSleeper;

#[async_trait]
impl SpinSleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Random source that replays a scripted sequence, then repeats zero.
#[derive(Default)]
pub struct ScriptedRandomSource(Mutex<VecDeque<f64>>);

impl ScriptedRandomSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self(Mutex::new(values.into()))
    }
}

impl RandomSource for ScriptedRandomSource {
    fn unit(&self) -> f64 {
        let mut values = match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("script mutex"),
        };
        values.pop_front().unwrap_or(0.0)
    }
}

/// Observer that records highlight and settlement ids.
#[derive(Default)]
pub struct RecordingSpinObserver {
    highlights: Mutex<Vec<String>>,
    settlements: Mutex<Vec<String>>,
}

impl RecordingSpinObserver {
    pub fn highlights(&self) -> Vec<String> {
        match self.highlights.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => panic!("highlights mutex"),
        }
    }

    pub fn settlements(&self) -> Vec<String> {
        match self.settlements.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => panic!("settlements mutex"),
        }
    }
}

impl SpinObserver for RecordingSpinObserver {
    fn highlight(&self, candidate: &Candidate) {
        match self.highlights.lock() {
            Ok(mut guard) => guard.push(candidate.id.clone()),
            Err(_) => panic!("highlights mutex"),
        }
    }

    fn settled(&self, winner: &Candidate) {
        match self.settlements.lock() {
            Ok(mut guard) => guard.push(winner.id.clone()),
            Err(_) => panic!("settlements mutex"),
        }
    }
}

/// Place source that pops one scripted response per call, sleeping through
/// the paired delay first. Exhausted scripts return empty batches.
pub struct QueuedPlaceSource {
    responses: Mutex<VecDeque<(Duration, Vec<PlaceElement>)>>,
}

impl QueuedPlaceSource {
    pub fn new(responses: Vec<(Duration, Vec<PlaceElement>)>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl PlaceSource for QueuedPlaceSource {
    async fn fetch_places(
        &self,
        _query: &PlaceQuery,
    ) -> Result<Vec<PlaceElement>, PlaceSourceError> {
        let (delay, elements) = {
            let mut responses = match self.responses.lock() {
                Ok(guard) => guard,
                Err(_) => panic!("responses mutex"),
            };
            responses.pop_front().unwrap_or((Duration::ZERO, Vec::new()))
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(elements)
    }
}

/// Snapshot store backed by a single in-memory slot.
#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshot: Mutex<Option<SessionSnapshot>>,
}

#[async_trait]
impl SessionSnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Option<SessionSnapshot>, SessionStoreError> {
        match self.snapshot.lock() {
            Ok(guard) => Ok(guard.clone()),
            Err(_) => panic!("snapshot mutex"),
        }
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), SessionStoreError> {
        match self.snapshot.lock() {
            Ok(mut guard) => {
                *guard = Some(snapshot.clone());
                Ok(())
            }
            Err(_) => panic!("snapshot mutex"),
        }
    }
}

/// Build a candidate with the usual Seocho coordinates.
pub fn candidate(id: &str, category: &str, rating: f64) -> Candidate {
    Candidate {
        id: id.to_owned(),
        name: format!("place {id}"),
        category: category.to_owned(),
        latitude: 37.4845,
        longitude: 127.0165,
        distance_meters: 100.0,
        walk_minutes: 2,
        rating,
    }
}

/// Build a named provider element with a cuisine tag.
pub fn named_element(id: i64, name: &str, cuisine: &str) -> PlaceElement {
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
