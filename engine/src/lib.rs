//! Restaurant discovery and weighted selection engine.
//!
//! Turns a location and a walking-time budget into a cached, deduplicated
//! candidate list from an external points-of-interest provider, then runs a
//! rating-weighted roulette with a shuffle/settle state machine over the
//! filtered subset. [`domain::SessionService`] is the entry point the
//! surrounding application drives; [`outbound`] holds the HTTP and storage
//! adapters behind the domain's ports.

pub mod domain;
pub mod outbound;

#[cfg(test)]
mod test_support;
