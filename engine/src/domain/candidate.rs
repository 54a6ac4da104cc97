//! Core domain records: user locations and discovered candidates.
//!
//! Both types round-trip through serde for snapshot and cache persistence;
//! JSON numbers preserve the full f64 precision of coordinates and ratings.

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;

/// A user location: coordinates plus the human-readable address.
///
/// Immutable value; relocation replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Display address shown to the user.
    pub display_address: String,
}

impl Location {
    /// Build a location from coordinates and a display address.
    pub fn new(latitude: f64, longitude: f64, display_address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            display_address: display_address.into(),
        }
    }

    /// Coordinate pair for geodesic math.
    pub fn coordinates(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A discoverable place with derived walking metrics.
///
/// `id` is provider-scoped: unique within one fetch batch, not stable across
/// providers. `distance_meters` and `walk_minutes` are derived from the
/// centre the batch was fetched around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Provider-scoped identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text category label.
    pub category: String,
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Great-circle distance from the fetch centre, in metres.
    pub distance_meters: f64,
    /// Walking time from the fetch centre at 80 m/min.
    pub walk_minutes: u32,
    /// Rating on the 1.0-5.0 scale.
    pub rating: f64,
}

impl Candidate {
    /// Coordinate pair for geodesic math.
    pub fn coordinates(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Serde round-trip coverage for persisted records.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn location_roundtrips_without_precision_loss() {
        let location = Location::new(37.4841, 127.0162, "서울 서초구 효령로 256");
        let json = serde_json::to_string(&location).expect("serialise");
        let parsed: Location = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, location);
    }

    #[rstest]
    fn candidate_roundtrips_without_precision_loss() {
        let candidate = Candidate {
            id: "node/42".to_owned(),
            name: "효령 파스타".to_owned(),
            category: "Italian".to_owned(),
            latitude: 37.485_000_000_001,
            longitude: 127.017,
            distance_meters: 312.25,
            walk_minutes: 4,
            rating: 4.3,
        };
        let json = serde_json::to_string(&candidate).expect("serialise");
        let parsed: Candidate = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(parsed, candidate);
    }

    #[rstest]
    fn candidate_wire_names_are_camel_case() {
        let candidate = Candidate {
            id: "node/1".to_owned(),
            name: "x".to_owned(),
            category: "Korean".to_owned(),
            latitude: 0.0,
            longitude: 0.0,
            distance_meters: 0.0,
            walk_minutes: 0,
            rating: 3.0,
        };
        let json = serde_json::to_string(&candidate).expect("serialise");
        assert!(json.contains("\"distanceMeters\""));
        assert!(json.contains("\"walkMinutes\""));
    }
}
