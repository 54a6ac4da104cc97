//! Port for cosmetic spin presentation effects.
//!
//! The observer receives the shuffle highlight and the settlement
//! celebration. Both are presentation-only: implementations must be
//! non-blocking and can never influence engine state or the selection
//! result.

use crate::domain::Candidate;

/// Observer for cosmetic spin effects.
pub trait SpinObserver: Send + Sync {
    /// The shuffle pointer moved to `candidate`.
    fn highlight(&self, candidate: &Candidate);

    /// The spin settled on `winner`; fire the celebration, best-effort.
    fn settled(&self, winner: &Candidate);
}

/// Observer that ignores every effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpinObserver;

impl SpinObserver for NullSpinObserver {
    fn highlight(&self, _candidate: &Candidate) {}

    fn settled(&self, _winner: &Candidate) {}
}
