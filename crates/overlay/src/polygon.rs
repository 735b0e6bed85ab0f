use crate::LatLng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A polygon overlay on a map.
///
/// Holds the boundary and styling of one polygon; the widget that owns the
/// overlay collection does the drawing. The boundary is an open ring: the
/// renderer connects the last coordinate back to the first, so the sequence
/// does not have to be pre-closed.
///
/// Style values are stored as given. Nothing is validated or clamped here;
/// an out-of-range opacity or malformed color string passes through to the
/// renderer untouched.
///
/// Equality and hashing cover the boundary and the five style fields only.
/// `z_index` and `geodesic` do not participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Polygon {
    /// Ordered boundary coordinates. The ring need not be pre-closed.
    pub coordinates: Vec<LatLng>,
    /// CSS-style fill color, e.g. `"#ffffff"`.
    pub fill_color: String,
    /// Fill opacity, nominally in `[0, 1]`.
    pub fill_opacity: f64,
    /// CSS-style stroke color.
    pub stroke_color: String,
    /// Stroke opacity, nominally in `[0, 1]`.
    pub stroke_opacity: f64,
    /// Stroke width in pixels.
    pub stroke_weight: i32,
    /// Stacking order relative to other overlays; higher draws on top.
    pub z_index: i32,
    /// When true, edges follow great-circle paths instead of straight lines.
    pub geodesic: bool,
}

impl Default for Polygon {
    fn default() -> Self {
        Self {
            coordinates: Vec::new(),
            fill_color: "#ffffff".to_string(),
            fill_opacity: 1.0,
            stroke_color: "#000000".to_string(),
            stroke_opacity: 1.0,
            stroke_weight: 1,
            z_index: 0,
            geodesic: false,
        }
    }
}

impl Polygon {
    /// Creates a polygon with default styling and an empty boundary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from its boundary, with default styling.
    pub fn from_coordinates(coordinates: Vec<LatLng>) -> Self {
        Self {
            coordinates,
            ..Self::default()
        }
    }

    /// Creates a fully styled polygon.
    ///
    /// `z_index` and `geodesic` keep their defaults; set them afterwards if
    /// needed.
    pub fn styled(
        coordinates: Vec<LatLng>,
        fill_color: impl Into<String>,
        fill_opacity: f64,
        stroke_color: impl Into<String>,
        stroke_opacity: f64,
        stroke_weight: i32,
    ) -> Self {
        Self {
            coordinates,
            fill_color: fill_color.into(),
            fill_opacity,
            stroke_color: stroke_color.into(),
            stroke_opacity,
            stroke_weight,
            ..Self::default()
        }
    }

    pub fn with_coordinates(mut self, coordinates: Vec<LatLng>) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn with_fill(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.fill_color = color.into();
        self.fill_opacity = opacity;
        self
    }

    pub fn with_stroke(mut self, color: impl Into<String>, opacity: f64, weight: i32) -> Self {
        self.stroke_color = color.into();
        self.stroke_opacity = opacity;
        self.stroke_weight = weight;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_geodesic(mut self, geodesic: bool) -> Self {
        self.geodesic = geodesic;
        self
    }
}

// z_index and geodesic are excluded from equality and hashing; opacities
// compare by bit pattern, which keeps Eq and Hash lawful.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
            && self.fill_color == other.fill_color
            && self.fill_opacity.to_bits() == other.fill_opacity.to_bits()
            && self.stroke_color == other.stroke_color
            && self.stroke_opacity.to_bits() == other.stroke_opacity.to_bits()
            && self.stroke_weight == other.stroke_weight
    }
}

impl Eq for Polygon {}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
        self.fill_color.hash(state);
        self.fill_opacity.to_bits().hash(state);
        self.stroke_color.hash(state);
        self.stroke_opacity.to_bits().hash(state);
        self.stroke_weight.hash(state);
    }
}
