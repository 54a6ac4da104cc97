//! DTOs for decoding Nominatim search responses.
//!
//! Nominatim serialises coordinates as strings; rows that fail to parse or
//! lack a display name are skipped rather than failing the batch.

use serde::Deserialize;

use crate::domain::ports::GeocodedPlace;

#[derive(Debug, Deserialize)]
pub(super) struct NominatimPlaceDto {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimPlaceDto {
    pub(super) fn into_geocoded_place(self) -> Option<GeocodedPlace> {
        let latitude: f64 = self.lat.trim().parse().ok()?;
        let longitude: f64 = self.lon.trim().parse().ok()?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }

        let display_name = self.display_name.filter(|name| !name.trim().is_empty())?;
        Some(GeocodedPlace {
            latitude,
            longitude,
            display_name,
        })
    }
}
