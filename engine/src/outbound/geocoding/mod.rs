//! Nominatim adapter for the geocoding source port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, NominatimHttpSource};
