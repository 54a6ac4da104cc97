//! Overpass API adapter for the place source port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, OverpassHttpIdentity, OverpassHttpSource};
