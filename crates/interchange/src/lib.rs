//! Overlay interchange format.
//!
//! JSON document format for exchanging map overlays with the client-side
//! renderer. Pure data, no expressions - what you see is what's there.
//!
//! # Document format
//!
//! ```json
//! {
//!   "version": "0.1",
//!   "polygons": [
//!     {
//!       "coordinates": [
//!         {"latitude": 60.45, "longitude": 22.3},
//!         {"latitude": 61.0, "longitude": 23.0}
//!       ],
//!       "fillColor": "#ff0000",
//!       "fillOpacity": 0.5,
//!       "strokeColor": "#000000",
//!       "strokeOpacity": 1.0,
//!       "strokeWeight": 2,
//!       "zIndex": 1,
//!       "geodesic": false
//!     }
//!   ]
//! }
//! ```

use overlay::Polygon;
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: &str = "0.1";

/// Error type for interchange operations.
#[derive(Debug)]
pub enum InterchangeError {
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for InterchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Serialize(msg) => write!(f, "Serialize error: {}", msg),
        }
    }
}

impl std::error::Error for InterchangeError {}

/// An overlay document that can be serialized to/from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub polygons: Vec<Polygon>,
}

fn default_version() -> String {
    FORMAT_VERSION.to_string()
}

impl Document {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            polygons,
        }
    }

    /// Serialize the document to a JSON string.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InterchangeError::Serialize(format!("{}", e)))
    }

    /// Parse a document from a JSON string.
    pub fn from_json(input: &str) -> Result<Self, InterchangeError> {
        serde_json::from_str(input).map_err(|e| InterchangeError::Parse(format!("{}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlay::LatLng;

    #[test]
    fn test_roundtrip() {
        let polygons = vec![
            Polygon::styled(
                vec![
                    LatLng::new(60.45, 22.3),
                    LatLng::new(61.0, 23.0),
                    LatLng::new(60.5, 24.0),
                ],
                "#ff0000",
                0.5,
                "#000000",
                1.0,
                2,
            )
            .with_z_index(1),
            Polygon::from_coordinates(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)])
                .with_geodesic(true),
        ];

        let doc = Document::new(polygons);
        let json = doc.to_json().expect("Failed to serialize");

        let parsed = Document::from_json(&json).expect("Failed to parse");

        assert_eq!(parsed.version, FORMAT_VERSION);
        assert_eq!(parsed.polygons.len(), 2);
        assert_eq!(parsed, doc);
        assert_eq!(parsed.polygons[0].z_index, 1);
        assert!(parsed.polygons[1].geodesic);
    }

    #[test]
    fn missing_version_defaults() {
        let parsed = Document::from_json(r#"{"polygons": []}"#).expect("Failed to parse");
        assert_eq!(parsed.version, FORMAT_VERSION);
        assert!(parsed.polygons.is_empty());
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = Document::from_json("{not json").unwrap_err();
        assert!(matches!(err, InterchangeError::Parse(_)));
    }
}
