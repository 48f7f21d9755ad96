//! Point structures for geographic and planar coordinates

use std::fmt;
use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, positive north
    pub lat: f64,
    /// Longitude, positive east
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A point on a region's canvas
///
/// `x` grows eastward, `y` grows southward (SVG convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    /// Horizontal position in canvas units
    pub x: f64,
    /// Vertical position in canvas units, 0 at the top edge
    pub y: f64,
}

impl PlanarPoint {
    /// Create a new planar point
    pub fn new(x: f64, y: f64) -> Self {
        PlanarPoint { x, y }
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
