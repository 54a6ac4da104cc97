//! Outbound adapters for the engine's driven ports.

pub mod cache;
pub mod geocoding;
pub mod overpass;
pub mod session;
pub mod store;
