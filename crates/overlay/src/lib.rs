//! Map overlay value model.
//!
//! This crate provides the plain data types a map widget exchanges with its
//! client-side renderer. Types here hold state only; drawing, hit testing,
//! and event wiring belong to the widget that owns them.

mod latlng;
mod polygon;

pub use latlng::LatLng;
pub use polygon::Polygon;
