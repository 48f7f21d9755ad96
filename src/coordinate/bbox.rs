//! Geographic bounding boxes and canvas extents

use super::point::{GeoPoint, PlanarPoint};

/// A geographic bounding box in decimal degrees
///
/// Invariant: `north > south` and `east > west`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Northern edge (maximum latitude)
    pub north: f64,
    /// Southern edge (minimum latitude)
    pub south: f64,
    /// Eastern edge (maximum longitude)
    pub east: f64,
    /// Western edge (minimum longitude)
    pub west: f64,
}

impl GeoBounds {
    /// Create a new bounding box
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        GeoBounds { north, south, east, west }
    }

    /// Whether the edges describe a non-empty box
    pub fn is_well_formed(&self) -> bool {
        self.north > self.south && self.east > self.west
    }

    /// Latitude span in degrees
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Check if this bounding box contains a coordinate (edges inclusive)
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north &&
            lng >= self.west && lng <= self.east
    }
}

/// Size of a region's drawing canvas, matching the SVG `viewBox`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Create a new canvas extent
    pub fn new(width: f64, height: f64) -> Self {
        CanvasSize { width, height }
    }

    pub fn is_well_formed(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check if a planar point lies on the canvas (edges inclusive)
    pub fn contains(&self, point: &PlanarPoint) -> bool {
        point.x >= 0.0 && point.x <= self.width &&
            point.y >= 0.0 && point.y <= self.height
    }
}
