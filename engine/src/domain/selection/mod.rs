//! Weighted selection engine and its shuffle/settle state machine.
//!
//! The machine walks `Idle → Shuffling → Settled → Idle`. A spin only starts
//! from `Idle` and only over a non-empty pool; while shuffling, a cosmetic
//! highlight re-randomizes on a fixed tick until a randomized total duration
//! elapses, then the weighted roulette settles on a winner.
//!
//! Cancellation uses an epoch token instead of timer handles: every reset
//! bumps the epoch, and a running spin re-checks its captured epoch at every
//! tick and before settling, so a stale spin can never settle against a pool
//! that no longer matches current filters.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Candidate;
use crate::domain::ports::{NullSpinObserver, RandomSource, SpinObserver};

mod policy;
mod runtime;

pub use runtime::{SmallRngRandomSource, TokioSpinSleeper};


/// Timer abstraction for shuffle ticks.
#[async_trait]
pub trait SpinSleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Spin timing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinConfig {
    /// Interval between highlight re-randomizations.
    pub tick: Duration,
    /// Minimum total shuffle duration.
    pub min_duration: Duration,
    /// Width of the uniform window added on top of `min_duration`.
    pub duration_span: Duration,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(50),
            min_duration: Duration::from_millis(2000),
            duration_span: Duration::from_millis(1000),
        }
    }
}

/// Phase of the selection state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionPhase {
    /// No spin in progress and no winner recorded.
    Idle,
    /// A spin is running its shuffle animation.
    Shuffling,
    /// A spin settled on this winner.
    Settled(Candidate),
}

impl SelectionPhase {
    /// The settled winner, if any.
    pub fn winner(&self) -> Option<&Candidate> {
        match self {
            Self::Settled(winner) => Some(winner),
            _ => None,
        }
    }
}

struct EngineState {
    phase: SelectionPhase,
    epoch: u64,
}

/// Weighted selection engine.
pub struct SelectionEngine {
    state: Mutex<EngineState>,
    random: Arc<dyn RandomSource>,
    sleeper: Arc<dyn SpinSleeper>,
    observer: Arc<dyn SpinObserver>,
    config: SpinConfig,
}

impl SelectionEngine {
    /// Build an engine with the tokio sleeper and a no-op observer.
    pub fn new(random: Arc<dyn RandomSource>, config: SpinConfig) -> Self {
        Self::with_runtime(
            random,
            Arc::new(TokioSpinSleeper),
            Arc::new(NullSpinObserver),
            config,
        )
    }

    /// Build an engine with injected runtime abstractions.
    pub fn with_runtime(
        random: Arc<dyn RandomSource>,
        sleeper: Arc<dyn SpinSleeper>,
        observer: Arc<dyn SpinObserver>,
        config: SpinConfig,
    ) -> Self {
        Self {
            state: Mutex::new(EngineState {
                phase: SelectionPhase::Idle,
                epoch: 0,
            }),
            random,
            sleeper,
            observer,
            config,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SelectionPhase {
        self.lock_state().phase.clone()
    }

    /// Run one spin over `pool`, the filtered candidate subset in its stable
    /// filtered order.
    ///
    /// A spin over an empty pool, or started while not `Idle`, is a no-op
    /// returning `None`. Returns `None` without settling when the spin is
    /// cancelled mid-shuffle.
    pub async fn spin(&self, pool: &[Candidate]) -> Option<Candidate> {
        if pool.is_empty() {
            return None;
        }

        let epoch = {
            let mut state = self.lock_state();
            if !matches!(state.phase, SelectionPhase::Idle) {
                return None;
            }
            state.phase = SelectionPhase::Shuffling;
            state.epoch
        };

        let ticks = self.draw_tick_count();
        for _ in 0..ticks {
            self.sleeper.sleep(self.config.tick).await;
            {
                let state = self.lock_state();
                if state.epoch != epoch || !matches!(state.phase, SelectionPhase::Shuffling) {
                    return None;
                }
            }
            let index = ((self.random.unit() * pool.len() as f64) as usize).min(pool.len() - 1);
            if let Some(candidate) = pool.get(index) {
                self.observer.highlight(candidate);
            }
        }

        let winner = policy::pick_weighted(pool, self.random.unit())?.clone();
        {
            let mut state = self.lock_state();
            if state.epoch != epoch {
                return None;
            }
            state.phase = SelectionPhase::Settled(winner.clone());
        }
        // Celebration is cosmetic: fire-and-forget, after state is settled.
        self.observer.settled(&winner);
        Some(winner)
    }

    /// Return to `Idle`, clearing any winner and invalidating in-flight
    /// spins.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        state.epoch += 1;
        state.phase = SelectionPhase::Idle;
    }

    /// Cancel a running shuffle without touching a settled winner.
    ///
    /// Used when the filtered subset changes mid-spin.
    pub fn cancel_if_shuffling(&self) {
        let mut state = self.lock_state();
        if matches!(state.phase, SelectionPhase::Shuffling) {
            state.epoch += 1;
            state.phase = SelectionPhase::Idle;
        }
    }

    /// Restore a previously settled winner, e.g. from a session snapshot.
    pub fn restore_settled(&self, winner: Candidate) {
        let mut state = self.lock_state();
        state.epoch += 1;
        state.phase = SelectionPhase::Settled(winner);
    }

    fn draw_tick_count(&self) -> u32 {
        let total = self.config.min_duration + self.config.duration_span.mul_f64(self.random.unit());
        let tick_millis = self.config.tick.as_millis().max(1);
        u32::try_from(total.as_millis() / tick_millis)
            .unwrap_or(u32::MAX)
            .max(1)
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
