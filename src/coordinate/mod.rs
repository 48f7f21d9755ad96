//! Coordinate handling for stylized country maps
//!
//! This module provides geographic and planar point types, bounding boxes
//! and the linear projection between them.

mod bbox;
mod point;
mod transform;

// Re-export key types
pub use self::bbox::{CanvasSize, GeoBounds};
pub use self::point::{GeoPoint, PlanarPoint};
pub use self::transform::{
    geo_to_planar, is_valid_planar_coordinates, is_valid_region_coordinates, planar_to_geo,
};
