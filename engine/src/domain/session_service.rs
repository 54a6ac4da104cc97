//! Session orchestration service.
//!
//! Owns the session aggregate and wires parameter changes to discovery
//! reloads, spins to the selection engine, and the persisted subset to the
//! snapshot store. Reloads are guarded by a generation counter so a newer
//! reload always supersedes an older in-flight one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use super::discovery::DiscoveryService;
use super::ports::{SessionSnapshotStore, SessionStoreError};
use super::selection::{SelectionEngine, SelectionPhase};
use super::{Candidate, Error, Location, LunchSession, WalkBudget, example_data};

fn map_store_error(error: SessionStoreError) -> Error {
    match error {
        SessionStoreError::Backend { message } => {
            Error::service_unavailable(format!("session store unavailable: {message}"))
        }
        SessionStoreError::Serialization { message } => {
            Error::internal(format!("session snapshot serialisation failed: {message}"))
        }
    }
}

/// Orchestrates one user's discovery and selection session.
pub struct SessionService {
    session: Mutex<LunchSession>,
    reload_generation: AtomicU64,
    discovery: DiscoveryService,
    engine: SelectionEngine,
    snapshot_store: Arc<dyn SessionSnapshotStore>,
}

impl SessionService {
    /// Build a service starting at the built-in default location.
    pub fn new(
        discovery: DiscoveryService,
        engine: SelectionEngine,
        snapshot_store: Arc<dyn SessionSnapshotStore>,
    ) -> Self {
        Self {
            session: Mutex::new(LunchSession::new(
                example_data::default_location(),
                WalkBudget::default(),
            )),
            reload_generation: AtomicU64::new(0),
            discovery,
            engine,
            snapshot_store,
        }
    }

    /// Move the session to a new location and reload candidates.
    pub async fn set_location(&self, location: Location) {
        self.lock_session().set_location(location);
        self.reload().await;
    }

    /// Change the walk budget and reload candidates.
    pub async fn set_walk_budget(&self, walk_budget: WalkBudget) {
        self.lock_session().set_walk_budget(walk_budget);
        self.reload().await;
    }

    /// Reload candidates for the current location and budget.
    ///
    /// Cancels any active selection and resets the category filter to the
    /// full new category set. If a newer reload starts while this one is in
    /// flight, this one's result is discarded.
    pub async fn reload(&self) {
        let generation = self.reload_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.engine.reset();
        {
            let mut session = self.lock_session();
            session.set_zoomed(false);
        }

        let (location, walk_budget) = {
            let session = self.lock_session();
            (session.location().clone(), session.walk_budget())
        };
        let outcome = self.discovery.load(&location, walk_budget).await;

        if self.reload_generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded discovery result");
            return;
        }
        self.lock_session().apply_reload(outcome);
    }

    /// Toggle one category in the filter, cancelling a spin in flight.
    pub fn toggle_category(&self, category: &str) {
        self.engine.cancel_if_shuffling();
        self.lock_session().toggle_category(category);
    }

    /// Select every category, cancelling a spin in flight.
    pub fn select_all_categories(&self) {
        self.engine.cancel_if_shuffling();
        self.lock_session().select_all_categories();
    }

    /// Deselect every category, cancelling a spin in flight.
    pub fn deselect_all_categories(&self) {
        self.engine.cancel_if_shuffling();
        self.lock_session().deselect_all_categories();
    }

    /// Spin over the filtered candidate subset.
    ///
    /// A no-op when the subset is empty or a selection is already active. A
    /// settled winner marks the session zoomed.
    pub async fn spin(&self) -> Option<Candidate> {
        let pool = self.lock_session().filtered_candidates();
        let winner = self.engine.spin(&pool).await;
        if winner.is_some() {
            self.lock_session().set_zoomed(true);
        }
        winner
    }

    /// Clear the active selection so the user can spin again.
    pub fn reset_selection(&self) {
        self.engine.reset();
        self.lock_session().set_zoomed(false);
    }

    /// Current selection phase.
    pub fn phase(&self) -> SelectionPhase {
        self.engine.phase()
    }

    /// Current location.
    pub fn location(&self) -> Location {
        self.lock_session().location().clone()
    }

    /// Current walk budget.
    pub fn walk_budget(&self) -> WalkBudget {
        self.lock_session().walk_budget()
    }

    /// Full candidate list for the active location and budget.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.lock_session().candidates().to_vec()
    }

    /// Sorted distinct categories across the candidate list.
    pub fn categories(&self) -> Vec<String> {
        self.lock_session().categories().to_vec()
    }

    /// Currently selected category labels, sorted.
    pub fn category_filter(&self) -> Vec<String> {
        self.lock_session().category_filter()
    }

    /// Whether the map is zoomed onto a settled winner.
    pub fn zoomed(&self) -> bool {
        self.lock_session().zoomed()
    }

    /// Persist the session subset through the snapshot store.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot store rejects the write.
    pub async fn save_snapshot(&self) -> Result<(), Error> {
        let winner = self.engine.phase().winner().cloned();
        let snapshot = self.lock_session().snapshot(winner);
        self.snapshot_store
            .save(&snapshot)
            .await
            .map_err(map_store_error)
    }

    /// Restore the persisted session subset, if one exists.
    ///
    /// Returns `Ok(false)` when no snapshot is stored. The restored filter
    /// is provisional until the next reload.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot store is unavailable.
    pub async fn restore_snapshot(&self) -> Result<bool, Error> {
        let Some(snapshot) = self.snapshot_store.load().await.map_err(map_store_error)? else {
            return Ok(false);
        };

        self.lock_session().apply_snapshot(&snapshot);
        match snapshot.winner {
            Some(winner) => self.engine.restore_settled(winner),
            None => self.engine.reset(),
        }
        Ok(true)
    }

    fn lock_session(&self) -> MutexGuard<'_, LunchSession> {
        match self.session.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
#[path = "session_service_tests.rs"]
mod tests;
