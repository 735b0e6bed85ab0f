//! Geographic coordinates for map overlays.
//!
//! Provides the coordinate pair type that overlay boundaries are built
//! from. Coordinates are plain decimal-degree values; nothing here wraps,
//! normalizes, or projects them.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A geographic coordinate pair in decimal degrees.
///
/// Latitude is positive north of the equator, longitude positive east of
/// the prime meridian. Values are stored exactly as given.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// Comparison and hashing go through the raw bit patterns so Eq and Hash
// stay consistent for coordinate sequences.
impl PartialEq for LatLng {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for LatLng {}

impl Hash for LatLng {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &LatLng) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = LatLng::new(60.452, 22.301);
        let b = LatLng::new(60.452, 22.301);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn comparison_is_bitwise() {
        // NaN equals itself, negative zero does not equal positive zero.
        let nan = LatLng::new(f64::NAN, 0.0);
        assert_eq!(nan, nan);
        assert_ne!(LatLng::new(-0.0, 0.0), LatLng::new(0.0, 0.0));
    }

    #[test]
    fn serializes_with_full_field_names() {
        let json = serde_json::to_string(&LatLng::new(1.5, -2.5)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.5}"#);
    }
}
