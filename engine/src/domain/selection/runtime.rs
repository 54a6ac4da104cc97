//! Default runtime implementations for the engine's injected abstractions.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::SpinSleeper;
use crate::domain::ports::RandomSource;

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSpinSleeper;

#[async_trait]
impl SpinSleeper for TokioSpinSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Small, fast PRNG behind the random port.
pub struct SmallRngRandomSource {
    rng: Mutex<SmallRng>,
}

impl SmallRngRandomSource {
    /// Entropy-seeded source for production wiring.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }

    /// Deterministically seeded source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SmallRngRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SmallRngRandomSource {
    fn unit(&self) -> f64 {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_range(0.0..1.0)
    }
}
