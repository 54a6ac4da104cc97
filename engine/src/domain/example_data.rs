//! Built-in demonstration dataset mapped into domain shapes.
//!
//! The `example-data` crate stays independent of engine types; this module
//! is the boundary that turns its records into [`Candidate`]s and exposes
//! the default centre they are anchored to.

use crate::domain::{Candidate, Location};

/// The built-in default location the demo dataset is anchored to.
pub fn default_location() -> Location {
    let center = example_data::default_center();
    Location::new(center.latitude, center.longitude, center.address)
}

/// Demonstration candidates, ordered by walking distance from the default
/// centre.
pub fn demo_candidates() -> Vec<Candidate> {
    example_data::example_restaurants()
        .iter()
        .map(|restaurant| Candidate {
            id: restaurant.id.to_owned(),
            name: restaurant.name.to_owned(),
            category: restaurant.category.to_owned(),
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
            distance_meters: restaurant.distance_meters,
            walk_minutes: restaurant.walk_minutes,
            rating: restaurant.rating,
        })
        .collect()
}
