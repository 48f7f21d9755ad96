//! Temple entities as delivered by the content store

use std::io::Read;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::coordinate::GeoPoint;
use crate::errors::MapResult;
use crate::spatial::Located;

/// Position block of a temple document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempleLocation {
    pub lat: f64,
    pub lng: f64,
    /// Free-text region label, e.g. "Deutschland" or "AT"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Older documents carry the label under `country`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl TempleLocation {
    /// The region label, preferring `region` over `country`
    pub fn label(&self) -> Option<&str> {
        self.region.as_deref().or(self.country.as_deref())
    }
}

/// A temple as fetched from the CMS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temple {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub location: TempleLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_on_homepage: Option<bool>,
}

impl Temple {
    /// Create an active temple without a region label
    pub fn new(name: &str, slug: &str, lat: f64, lng: f64) -> Self {
        Temple {
            id: None,
            name: name.to_string(),
            slug: slug.to_string(),
            location: TempleLocation { lat, lng, region: None, country: None },
            is_active: None,
            featured_on_homepage: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_region(mut self, label: &str) -> Self {
        self.location.region = Some(label.to_string());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured_on_homepage = Some(featured);
        self
    }

    /// Active unless explicitly marked inactive
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn is_featured(&self) -> bool {
        self.featured_on_homepage.unwrap_or(false)
    }

    /// Identifier for the map record; the slug stands in for a missing id
    pub fn record_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.slug)
    }
}

impl Located for Temple {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.location.lat, self.location.lng)
    }
}

/// Read a JSON array of temples, skipping entries that do not parse
///
/// Only a malformed document as a whole (not an array) is an error; a bad
/// entry is logged and left out.
pub fn read_temple_array<R: Read>(reader: R) -> MapResult<Vec<Temple>> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    let mut temples = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Temple>(value) {
            Ok(temple) => temples.push(temple),
            Err(e) => warn!("Skipping temple #{}: {}", index, e),
        }
    }

    Ok(temples)
}
