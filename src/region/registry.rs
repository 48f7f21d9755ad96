//! Region definitions and the ordered region registry

use crate::coordinate::{CanvasSize, GeoBounds, GeoPoint};

/// A named map region: a canvas extent paired with a geographic box
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: String,
    canvas: CanvasSize,
    bounds: GeoBounds,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `id` - Canonical identifier, e.g. "germany"
    /// * `canvas` - SVG canvas size of the region's artwork
    /// * `bounds` - Geographic box the artwork covers
    pub fn new(id: &str, canvas: CanvasSize, bounds: GeoBounds) -> Self {
        Region {
            id: id.to_string(),
            canvas,
            bounds,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn canvas(&self) -> &CanvasSize {
        &self.canvas
    }

    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    /// Center of the geographic bounding box
    pub fn center(&self) -> GeoPoint {
        self.bounds.center()
    }
}

/// An ordered, read-only collection of regions
///
/// Iteration order is significant: region detection returns the first
/// region containing a point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    regions: Vec<Region>,
}

impl Registry {
    /// Create a registry from regions in detection order
    pub fn new(regions: Vec<Region>) -> Self {
        Registry { regions }
    }

    /// Look up a region by its identifier
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Look up a region ignoring ASCII case and surrounding whitespace
    pub fn find_ignore_case(&self, id: &str) -> Option<&Region> {
        let id = id.trim();
        self.regions.iter().find(|region| region.id.eq_ignore_ascii_case(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Identifiers in registry order
    pub fn ids(&self) -> Vec<&str> {
        self.regions.iter().map(|region| region.id()).collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
