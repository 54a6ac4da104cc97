//! Domain entities, services, and ports for the lunch roulette engine.
//!
//! Purpose: own every rule of discovery and selection — geodesic math,
//! cache-key quantization, candidate mapping, the weighted roulette state
//! machine, and session orchestration — behind driven ports so adapters stay
//! swappable.
//!
//! Public surface:
//! - [`Candidate`], [`Location`] — core records shared with adapters.
//! - [`DiscoveryService`] — cache-backed candidate loading with the demo
//!   fallback.
//! - [`SelectionEngine`] — the shuffle/settle weighted roulette.
//! - [`SessionService`] — the single entry point callers drive.
//! - [`GeocodingService`] — fail-open address search.
//! - [`ports`] — driven-port traits with fixtures for testing.

mod candidate;
pub mod discovery;
mod error;
pub mod example_data;
pub mod geo;
mod geocoding;
pub mod ports;
pub mod selection;
mod session;
mod session_service;

pub use candidate::{Candidate, Location};
pub use discovery::{DiscoveryConfig, DiscoveryOutcome, DiscoveryService};
pub use error::{Error, ErrorCode};
pub use geocoding::GeocodingService;
pub use selection::{
    SelectionEngine, SelectionPhase, SmallRngRandomSource, SpinConfig, SpinSleeper,
    TokioSpinSleeper,
};
pub use session::{LunchSession, ParseWalkBudgetError, SessionSnapshot, WalkBudget};
pub use session_service::SessionService;
