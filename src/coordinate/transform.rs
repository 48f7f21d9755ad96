//! Equirectangular projection between geographic and canvas coordinates
//!
//! Positions are interpolated linearly inside a region's bounding box. No
//! spherical correction is applied: the map artwork was drawn against this
//! exact linear grid, so pixel positions only line up with it.

use log::{debug, warn};

use super::point::{GeoPoint, PlanarPoint};
use crate::region::Region;
use crate::utils::format_utils::{round_to, GEO_DECIMALS, PLANAR_DECIMALS};

/// Project a geographic coordinate onto a region's canvas
///
/// Points outside the region's bounds are extrapolated and a warning is
/// logged; the call never fails.
pub fn geo_to_planar(lat: f64, lng: f64, region: &Region) -> PlanarPoint {
    if !is_valid_region_coordinates(lat, lng, region) {
        warn!("Coordinate {},{} lies outside the bounds of region '{}'", lat, lng, region.id());
    }

    let bounds = region.bounds();
    let canvas = region.canvas();

    let normalized_lat = (lat - bounds.south) / bounds.lat_span();
    let normalized_lng = (lng - bounds.west) / bounds.lng_span();

    let x = normalized_lng * canvas.width;
    // Latitude grows northward, canvas y grows downward
    let y = (1.0 - normalized_lat) * canvas.height;

    let point = PlanarPoint::new(round_to(x, PLANAR_DECIMALS), round_to(y, PLANAR_DECIMALS));
    debug!("Projected {},{} to {} on region '{}'", lat, lng, point, region.id());
    point
}

/// Convert a canvas position back to a geographic coordinate
///
/// Inverse of [`geo_to_planar`]. Positions off the canvas are extrapolated
/// and a warning is logged.
pub fn planar_to_geo(x: f64, y: f64, region: &Region) -> GeoPoint {
    if !is_valid_planar_coordinates(x, y, region) {
        warn!("Point {},{} lies outside the canvas of region '{}'", x, y, region.id());
    }

    let bounds = region.bounds();
    let canvas = region.canvas();

    let normalized_x = x / canvas.width;
    let normalized_y = y / canvas.height;

    let lat = bounds.south + (1.0 - normalized_y) * bounds.lat_span();
    let lng = bounds.west + normalized_x * bounds.lng_span();

    GeoPoint::new(round_to(lat, GEO_DECIMALS), round_to(lng, GEO_DECIMALS))
}

/// `true` iff `south <= lat <= north` and `west <= lng <= east`
pub fn is_valid_region_coordinates(lat: f64, lng: f64, region: &Region) -> bool {
    region.bounds().contains(lat, lng)
}

/// `true` iff the point lies on the region's canvas
pub fn is_valid_planar_coordinates(x: f64, y: f64, region: &Region) -> bool {
    region.canvas().contains(&PlanarPoint::new(x, y))
}
