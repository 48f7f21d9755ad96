//! Region detection from a raw coordinate

use log::debug;

use crate::region::{Region, Registry};

/// Find the region a coordinate belongs to
///
/// Returns the first region in registry order whose bounds contain the
/// point. Otherwise falls back to the region whose bounds center is
/// nearest in plain degree space (first seen wins ties), so a non-empty
/// registry always yields a region. NaN or infinite input yields `None`.
pub fn detect_region(lat: f64, lng: f64, registry: &Registry) -> Option<&Region> {
    if !lat.is_finite() || !lng.is_finite() {
        debug!("Cannot detect a region for non-finite coordinate {},{}", lat, lng);
        return None;
    }

    if let Some(region) = registry.iter().find(|r| r.bounds().contains(lat, lng)) {
        return Some(region);
    }

    let mut nearest: Option<(&Region, f64)> = None;
    for region in registry {
        let center = region.center();
        let distance = ((lat - center.lat).powi(2) + (lng - center.lng).powi(2)).sqrt();
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((region, distance)),
        }
    }

    if let Some((region, distance)) = nearest {
        debug!("{},{} is outside every region, nearest center is '{}' ({:.3}°)",
               lat, lng, region.id(), distance);
    }

    nearest.map(|(region, _)| region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{CanvasSize, GeoBounds};

    #[test]
    fn test_centers_detect_their_own_region() {
        let registry = Registry::dach();
        for region in registry {
            let center = region.center();
            let detected = detect_region(center.lat, center.lng, registry).unwrap();
            assert_eq!(detected.id(), region.id());
        }
    }

    #[test]
    fn test_overlap_prefers_registry_order() {
        // Munich lies in both the German and the Austrian box
        let detected = detect_region(48.1351, 11.5820, Registry::dach()).unwrap();
        assert_eq!(detected.id(), "austria");

        let berlin = detect_region(52.52, 13.405, Registry::dach()).unwrap();
        assert_eq!(berlin.id(), "germany");
    }

    #[test]
    fn test_far_away_point_gets_nearest_center() {
        let detected = detect_region(0.0, 0.0, Registry::dach()).unwrap();
        assert_eq!(detected.id(), "switzerland");

        let north_sea = detect_region(58.0, 8.0, Registry::dach()).unwrap();
        assert_eq!(north_sea.id(), "germany");
    }

    #[test]
    fn test_single_region_always_detected() {
        let detected = detect_region(-33.9, 18.4, Registry::germany()).unwrap();
        assert_eq!(detected.id(), "germany");
    }

    #[test]
    fn test_non_finite_coordinate_has_no_region() {
        assert!(detect_region(f64::NAN, 10.0, Registry::dach()).is_none());
        assert!(detect_region(50.0, f64::NAN, Registry::dach()).is_none());
        assert!(detect_region(f64::INFINITY, 10.0, Registry::germany()).is_none());
    }

    #[test]
    fn test_empty_registry() {
        assert!(detect_region(52.52, 13.405, &Registry::default()).is_none());
    }

    #[test]
    fn test_equidistant_centers_first_wins() {
        let canvas = CanvasSize::new(100.0, 100.0);
        let registry = Registry::new(vec![
            Region::new("west", canvas, GeoBounds::new(1.0, -1.0, -9.0, -11.0)),
            Region::new("east", canvas, GeoBounds::new(1.0, -1.0, 11.0, 9.0)),
        ]);
        assert_eq!(detect_region(0.0, 0.0, &registry).unwrap().id(), "west");
    }
}
