//! Map-ready location records
//!
//! A [`Location`] is a transient projection of a [`Temple`] onto a region's
//! canvas, built on demand for rendering and never stored.

mod converter;
mod temple;

use serde::{Deserialize, Serialize};

use crate::coordinate::{GeoPoint, PlanarPoint};
use crate::spatial::Located;

pub use self::converter::LocationConverter;
pub use self::temple::{read_temple_array, Temple, TempleLocation};

/// A temple placed on a map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub x: f64,
    pub y: f64,
    pub lat: f64,
    pub lng: f64,
    /// Region the point was projected on; absent for single-region maps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub is_active: bool,
    pub featured_on_homepage: bool,
}

impl Location {
    pub fn planar(&self) -> PlanarPoint {
        PlanarPoint::new(self.x, self.y)
    }
}

impl Located for Location {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
