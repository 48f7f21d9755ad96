//! Rounding and formatting helpers

use crate::coordinate::{GeoPoint, PlanarPoint};

/// Decimal places kept for planar coordinates
pub const PLANAR_DECIMALS: u32 = 1;

/// Decimal places kept for geographic coordinates
pub const GEO_DECIMALS: u32 = 5;

/// Decimal places kept for distances in kilometers
pub const DISTANCE_DECIMALS: u32 = 2;

/// Round a value to a fixed number of decimal places
///
/// Halves round away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a planar point with its rounding precision
pub fn format_planar(point: &PlanarPoint) -> String {
    format!("x={:.1} y={:.1}", point.x, point.y)
}

/// Format a geographic point with its rounding precision
pub fn format_geo(point: &GeoPoint) -> String {
    format!("lat={:.5} lng={:.5}", point.lat, point.lng)
}
