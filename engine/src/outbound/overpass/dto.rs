//! DTOs for decoding Overpass JSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into raw
//! domain elements in one pass. Elements without usable coordinates are
//! dropped rather than failing the batch; the provider routinely mixes
//! skeleton entries into otherwise good payloads.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::ports::PlaceElement;

#[derive(Debug, Deserialize)]
pub(super) struct OverpassResponseDto {
    #[serde(default)]
    pub(super) elements: Vec<OverpassElementDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OverpassElementDto {
    #[serde(rename = "type")]
    element_type: String,
    id: i64,
    lon: Option<f64>,
    lat: Option<f64>,
    center: Option<OverpassElementCenterDto>,
    #[serde(default)]
    tags: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OverpassElementCenterDto {
    lon: f64,
    lat: f64,
}

impl OverpassResponseDto {
    pub(super) fn into_place_elements(self) -> Vec<PlaceElement> {
        self.elements
            .into_iter()
            .filter_map(OverpassElementDto::into_place_element)
            .collect()
    }
}

impl OverpassElementDto {
    fn into_place_element(self) -> Option<PlaceElement> {
        let (longitude, latitude) = self.coordinates()?;
        if !longitude.is_finite() || !latitude.is_finite() {
            return None;
        }

        Some(PlaceElement {
            element_type: self.element_type,
            element_id: self.id,
            latitude,
            longitude,
            tags: self.tags,
        })
    }

    fn coordinates(&self) -> Option<(f64, f64)> {
        if let (Some(longitude), Some(latitude)) = (self.lon, self.lat) {
            return Some((longitude, latitude));
        }
        self.center.as_ref().map(|center| (center.lon, center.lat))
    }
}

#[cfg(test)]
mod tests {
    //! Decode coverage, including centre fallbacks and skeleton entries.
    use super::*;

    fn decode(body: &str) -> Vec<PlaceElement> {
        let dto: OverpassResponseDto = serde_json::from_str(body).expect("valid JSON");
        dto.into_place_elements()
    }

    #[test]
    fn decodes_nodes_and_way_centres() {
        let elements = decode(
            r#"{
                "elements": [
                    {
                        "type": "node",
                        "id": 101,
                        "lat": 37.4845,
                        "lon": 127.0165,
                        "tags": { "amenity": "cafe", "name": "카페" }
                    },
                    {
                        "type": "way",
                        "id": 102,
                        "center": { "lat": 37.4838, "lon": 127.0158 },
                        "tags": { "name": "서초 돈까스" }
                    }
                ]
            }"#,
        );

        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements.first().map(|e| e.element_type.as_str()),
            Some("node")
        );
        assert_eq!(elements.get(1).map(|e| e.latitude), Some(37.4838));
    }

    #[test]
    fn skeleton_entries_without_coordinates_are_dropped() {
        let elements = decode(
            r#"{
                "elements": [
                    { "type": "way", "id": 201, "tags": { "name": "missing-centre" } },
                    { "type": "node", "id": 202, "lat": 37.0, "lon": 127.0 }
                ]
            }"#,
        );

        assert_eq!(elements.len(), 1);
        assert_eq!(elements.first().map(|e| e.element_id), Some(202));
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let elements = decode(
            r#"{ "elements": [ { "type": "node", "id": 1, "lat": 1.0, "lon": 2.0 } ] }"#,
        );
        assert_eq!(elements.first().map(|e| e.tags.len()), Some(0));
    }

    #[test]
    fn empty_payload_decodes_to_no_elements() {
        assert!(decode("{}").is_empty());
    }
}
