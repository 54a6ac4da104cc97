//! Pure geodesic helpers shared by discovery and session logic.
//!
//! Everything here is side-effect free and total: the haversine distance and
//! the derived walking time are the only geodesic math in the engine, and the
//! 80 m/min walking-speed constant is the single source of truth for every
//! radius-to-minutes conversion.

/// Mean Earth radius in metres used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// System-wide walking speed in metres per minute.
pub const WALKING_SPEED_METERS_PER_MINUTE: f64 = 80.0;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Great-circle distance between two points in metres.
///
/// Standard haversine over a spherical Earth; accurate to double precision
/// with no further approximation.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi_a = a.latitude.to_radians();
    let phi_b = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let half_chord = (delta_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (delta_lambda / 2.0).sin().powi(2);
    let angular_distance = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_METERS * angular_distance
}

/// Walking time in whole minutes for a distance in metres.
pub fn walk_minutes(distance_meters: f64) -> u32 {
    (distance_meters / WALKING_SPEED_METERS_PER_MINUTE).round() as u32
}
