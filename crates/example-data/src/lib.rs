//! Deterministic example restaurant data for demonstration purposes.
//!
//! This crate provides the fixed demo dataset the discovery engine falls back
//! to when the live place provider returns nothing for the built-in default
//! centre. It is designed to be independent of engine domain types to avoid
//! circular dependencies; the engine maps these records into its own
//! candidate shape at the boundary.
//!
//! # Example
//!
//! ```
//! use example_data::{default_center, example_restaurants};
//!
//! let center = default_center();
//! assert!(center.latitude > 37.0);
//!
//! let within_ten_minutes = example_restaurants()
//!     .iter()
//!     .filter(|restaurant| restaurant.walk_minutes <= 10)
//!     .count();
//! assert!(within_ten_minutes > 0);
//! ```

/// The built-in default centre the demo dataset is anchored to.
///
/// Seoul, Seocho-gu, Hyoryeong-ro 256.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleCenter {
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Human-readable address of the centre.
    pub address: &'static str,
}

/// One demonstration restaurant record.
///
/// Distances and walk minutes are pre-derived relative to
/// [`default_center`] so the dataset needs no geodesic math of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExampleRestaurant {
    /// Stable identifier, unique within this dataset.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Free-text category label.
    pub category: &'static str,
    /// Latitude in WGS84.
    pub latitude: f64,
    /// Longitude in WGS84.
    pub longitude: f64,
    /// Great-circle distance from the default centre, in metres.
    pub distance_meters: f64,
    /// Walking time from the default centre at 80 m/min, in minutes.
    pub walk_minutes: u32,
    /// Rating on the 1.0–5.0 scale.
    pub rating: f64,
}

const DEFAULT_CENTER: ExampleCenter = ExampleCenter {
    latitude: 37.4841,
    longitude: 127.0162,
    address: "서울 서초구 효령로 256 세원빌딩",
};

const EXAMPLE_RESTAURANTS: &[ExampleRestaurant] = &[
    ExampleRestaurant {
        id: "1",
        name: "맛있는 김치찌개",
        category: "Korean",
        latitude: 37.4845,
        longitude: 127.0165,
        distance_meters: 100.0,
        walk_minutes: 2,
        rating: 4.5,
    },
    ExampleRestaurant {
        id: "2",
        name: "서초 돈까스",
        category: "Japanese",
        latitude: 37.4838,
        longitude: 127.0158,
        distance_meters: 150.0,
        walk_minutes: 3,
        rating: 4.2,
    },
    ExampleRestaurant {
        id: "3",
        name: "효령 파스타",
        category: "Italian",
        latitude: 37.4850,
        longitude: 127.0170,
        distance_meters: 300.0,
        walk_minutes: 5,
        rating: 4.0,
    },
    ExampleRestaurant {
        id: "4",
        name: "남부터미널 국밥",
        category: "Korean",
        latitude: 37.4830,
        longitude: 127.0150,
        distance_meters: 400.0,
        walk_minutes: 7,
        rating: 4.7,
    },
    ExampleRestaurant {
        id: "5",
        name: "스시 마이",
        category: "Japanese",
        latitude: 37.4855,
        longitude: 127.0180,
        distance_meters: 500.0,
        walk_minutes: 8,
        rating: 4.4,
    },
    ExampleRestaurant {
        id: "6",
        name: "버거 킹덤",
        category: "Western",
        latitude: 37.4825,
        longitude: 127.0145,
        distance_meters: 600.0,
        walk_minutes: 10,
        rating: 3.8,
    },
    ExampleRestaurant {
        id: "7",
        name: "매운 떡볶이",
        category: "Snack",
        latitude: 37.4860,
        longitude: 127.0190,
        distance_meters: 700.0,
        walk_minutes: 12,
        rating: 4.1,
    },
    ExampleRestaurant {
        id: "8",
        name: "건강 샐러드",
        category: "Western",
        latitude: 37.4820,
        longitude: 127.0140,
        distance_meters: 800.0,
        walk_minutes: 14,
        rating: 3.9,
    },
];

/// Return the built-in default centre the dataset is anchored to.
#[must_use]
pub const fn default_center() -> ExampleCenter {
    DEFAULT_CENTER
}

/// Return the demonstration restaurant records.
///
/// Records are ordered by walking distance from the default centre.
#[must_use]
pub const fn example_restaurants() -> &'static [ExampleRestaurant] {
    EXAMPLE_RESTAURANTS
}
