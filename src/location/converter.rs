//! Temple to map location conversion

use log::{debug, info, warn};

use super::temple::Temple;
use super::Location;
use crate::coordinate::geo_to_planar;
use crate::region::{resolve_alias, Region, Registry};
use crate::spatial::detect_region;

/// How a converter picks the region for each temple
#[derive(Debug, Clone, Copy)]
enum Regions<'r> {
    /// One fixed map, no resolution
    Single(&'r Region),
    /// Explicit label first, then geometric detection
    Multi(&'r Registry),
}

/// Converts temples into map-ready [`Location`] records
#[derive(Debug, Clone, Copy)]
pub struct LocationConverter<'r> {
    regions: Regions<'r>,
}

impl<'r> LocationConverter<'r> {
    /// Project every temple onto a single region's map
    pub fn single(region: &'r Region) -> Self {
        LocationConverter { regions: Regions::Single(region) }
    }

    /// Resolve each temple's region within `registry`
    pub fn multi(registry: &'r Registry) -> Self {
        LocationConverter { regions: Regions::Multi(registry) }
    }

    /// Pick the region a temple is drawn on, `None` if unresolvable
    pub fn resolve_region(&self, temple: &Temple) -> Option<&'r Region> {
        match self.regions {
            Regions::Single(region) => Some(region),
            Regions::Multi(registry) => {
                if let Some(label) = temple.location.label() {
                    if let Some(region) = Self::region_for_label(label, registry) {
                        debug!("Temple '{}' uses labelled region '{}'", temple.slug, region.id());
                        return Some(region);
                    }
                    warn!("Temple '{}' has unknown region label '{}', detecting from coordinates",
                          temple.slug, label);
                }
                detect_region(temple.location.lat, temple.location.lng, registry)
            }
        }
    }

    fn region_for_label(label: &str, registry: &'r Registry) -> Option<&'r Region> {
        match resolve_alias(label) {
            Some(country) => registry.get(country.id()),
            None => registry.find_ignore_case(label),
        }
    }

    /// Convert one temple
    ///
    /// Returns `None` for inactive temples, and with a warning when no
    /// region can be resolved.
    pub fn to_location(&self, temple: &Temple) -> Option<Location> {
        if !temple.is_active() {
            debug!("Temple '{}' is inactive; skipping", temple.slug);
            return None;
        }

        let region = match self.resolve_region(temple) {
            Some(region) => region,
            None => {
                warn!("No map region for temple '{}' at {},{}; skipping",
                      temple.slug, temple.location.lat, temple.location.lng);
                return None;
            }
        };

        let point = geo_to_planar(temple.location.lat, temple.location.lng, region);
        let region_id = match self.regions {
            Regions::Single(_) => None,
            Regions::Multi(_) => Some(region.id().to_string()),
        };

        Some(Location {
            id: temple.record_id().to_string(),
            name: temple.name.clone(),
            slug: temple.slug.clone(),
            x: point.x,
            y: point.y,
            lat: temple.location.lat,
            lng: temple.location.lng,
            region: region_id,
            is_active: temple.is_active(),
            featured_on_homepage: temple.is_featured(),
        })
    }

    /// Convert a batch of temples
    ///
    /// Inactive temples are filtered out and unresolvable ones dropped;
    /// the rest keep their input order.
    pub fn to_locations(&self, temples: &[Temple]) -> Vec<Location> {
        self.to_locations_observed(temples, |_, _| {})
    }

    /// Like [`to_locations`](Self::to_locations), calling `observer` once per
    /// input temple with the produced location (`None` when skipped)
    pub fn to_locations_observed<F>(&self, temples: &[Temple], mut observer: F) -> Vec<Location>
    where
        F: FnMut(&Temple, Option<&Location>),
    {
        let mut locations = Vec::with_capacity(temples.len());
        let mut inactive = 0usize;

        for temple in temples {
            if !temple.is_active() {
                inactive += 1;
                observer(temple, None);
                continue;
            }

            match self.to_location(temple) {
                Some(location) => {
                    observer(temple, Some(&location));
                    locations.push(location);
                }
                None => observer(temple, None),
            }
        }

        let dropped = temples.len() - inactive - locations.len();
        info!("Converted {} of {} temples ({} inactive, {} unresolved)",
              locations.len(), temples.len(), inactive, dropped);

        locations
    }
}
