//! Mapping from raw provider elements into domain candidates.
//!
//! The provider carries no trustworthy rating signal, so ratings are
//! fabricated uniformly in [3.0, 5.0]; a documented upstream limitation, not
//! a scoring decision.

use std::collections::BTreeMap;

use crate::domain::geo::{self, GeoPoint};
use crate::domain::ports::{PlaceElement, RandomSource};
use crate::domain::{Candidate, Location};

/// Label applied when an element has neither a cuisine nor an amenity tag.
const GENERIC_CATEGORY: &str = "Restaurant";

/// Map raw elements into candidates, dropping entries without a usable name.
pub(super) fn candidates_from_elements(
    center: &Location,
    elements: Vec<PlaceElement>,
    random: &dyn RandomSource,
) -> Vec<Candidate> {
    elements
        .into_iter()
        .filter_map(|element| candidate_from_element(center, element, random))
        .collect()
}

fn candidate_from_element(
    center: &Location,
    element: PlaceElement,
    random: &dyn RandomSource,
) -> Option<Candidate> {
    // Unnamed points are not useful choices and never surface to selection.
    let name = element
        .tags
        .get("name")
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())?;

    let distance = geo::distance_meters(
        center.coordinates(),
        GeoPoint {
            latitude: element.latitude,
            longitude: element.longitude,
        },
    );

    Some(Candidate {
        id: format!("{}/{}", element.element_type, element.element_id),
        name,
        category: category_label(&element.tags),
        latitude: element.latitude,
        longitude: element.longitude,
        distance_meters: distance.round(),
        walk_minutes: geo::walk_minutes(distance),
        rating: fabricated_rating(random),
    })
}

/// Most specific available tag wins: cuisine, then amenity, then generic.
fn category_label(tags: &BTreeMap<String, String>) -> String {
    tags.get("cuisine")
        .or_else(|| tags.get("amenity"))
        .map_or_else(|| GENERIC_CATEGORY.to_owned(), Clone::clone)
}

/// Uniform rating in [3.0, 5.0], rounded to one decimal.
fn fabricated_rating(random: &dyn RandomSource) -> f64 {
    ((3.0 + random.unit() * 2.0) * 10.0).round() / 10.0
}
