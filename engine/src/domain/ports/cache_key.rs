//! Quantized cache key shared by discovery cache adapters.
//!
//! The key folds the search radius and the centre coordinates rounded to
//! three decimal places into one string. Two centres within roughly 110 m of
//! each other with the same radius collapse onto the same key, trading cache
//! precision for hit rate.

/// Cache key used to store and retrieve discovery results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveryCacheKey(String);

impl DiscoveryCacheKey {
    /// Quantize a radius and centre into a canonical key.
    pub fn quantize(radius_meters: u32, latitude: f64, longitude: f64) -> Self {
        Self(format!("{radius_meters}_{latitude:.3}_{longitude:.3}"))
    }

    /// Borrow the underlying key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for DiscoveryCacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for DiscoveryCacheKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
