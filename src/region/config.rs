//! Loading a region registry from TOML
//!
//! Expected layout, one table per region in detection order:
//!
//! ```toml
//! [[region]]
//! id = "germany"
//! width = 585.5
//! height = 792.7
//! north = 55.05
//! south = 47.27
//! east = 15.04
//! west = 5.87
//! ```

use std::collections::HashSet;
use std::fs;
use log::{debug, info};

use super::registry::{Region, Registry};
use crate::coordinate::{CanvasSize, GeoBounds};
use crate::errors::{MapError, MapResult};

impl Registry {
    /// Parse a registry from a TOML string
    pub fn from_toml_str(content: &str) -> MapResult<Self> {
        let toml_value: toml::Table = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(MapError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let tables = toml_value.get("region")
            .and_then(|v| v.as_array())
            .ok_or_else(|| MapError::ConfigError("Missing [[region]] tables".to_string()))?;

        let mut regions = Vec::with_capacity(tables.len());
        let mut seen = HashSet::new();

        for (index, table) in tables.iter().enumerate() {
            let region = Self::parse_region(table, index)?;
            if !seen.insert(region.id().to_string()) {
                return Err(MapError::ConfigError(format!("Duplicate region id '{}'", region.id())));
            }
            debug!("Loaded region '{}' ({:?})", region.id(), region.bounds());
            regions.push(region);
        }

        Ok(Registry::new(regions))
    }

    /// Load a registry from a TOML file
    pub fn from_file(path: &str) -> MapResult<Self> {
        let contents = fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&contents)?;
        info!("Loaded {} regions from {}", registry.len(), path);
        Ok(registry)
    }

    fn parse_region(table: &toml::Value, index: usize) -> MapResult<Region> {
        let id = table.get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MapError::ConfigError(format!("Region #{} has no string 'id'", index)))?;

        let number = |key: &str| -> MapResult<f64> {
            match table.get(key) {
                Some(toml::Value::Float(f)) => Ok(*f),
                Some(toml::Value::Integer(i)) => Ok(*i as f64),
                _ => Err(MapError::ConfigError(format!("Region '{}' has no numeric '{}'", id, key))),
            }
        };

        let canvas = CanvasSize::new(number("width")?, number("height")?);
        if !canvas.is_well_formed() {
            return Err(MapError::ConfigError(format!(
                "Region '{}' canvas must have positive width and height", id)));
        }

        let bounds = GeoBounds::new(number("north")?, number("south")?, number("east")?, number("west")?);
        if !bounds.is_well_formed() {
            return Err(MapError::ConfigError(format!(
                "Region '{}' bounds need north > south and east > west", id)));
        }

        Ok(Region::new(id, canvas, bounds))
    }
}
