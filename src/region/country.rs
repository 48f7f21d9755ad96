//! Built-in DACH regions
//!
//! Bounds and canvas sizes match the hand-drawn SVG country maps.

use std::fmt;
use std::str::FromStr;
use lazy_static::lazy_static;

use super::registry::{Region, Registry};
use crate::coordinate::{CanvasSize, GeoBounds};
use crate::errors::MapError;

lazy_static! {
    static ref GERMANY: Region = Region::new(
        "germany",
        CanvasSize::new(585.5, 792.7),
        GeoBounds::new(55.05, 47.27, 15.04, 5.87),
    );

    static ref AUSTRIA: Region = Region::new(
        "austria",
        CanvasSize::new(800.0, 412.4),
        GeoBounds::new(49.02, 46.37, 17.16, 9.53),
    );

    static ref SWITZERLAND: Region = Region::new(
        "switzerland",
        CanvasSize::new(600.0, 385.2),
        GeoBounds::new(47.81, 45.82, 10.49, 5.96),
    );

    static ref GERMANY_REGISTRY: Registry = Registry::new(vec![GERMANY.clone()]);

    // Austria and Switzerland overlap Germany's box, so they are tried first
    static ref DACH_REGISTRY: Registry = Registry::new(vec![
        AUSTRIA.clone(),
        SWITZERLAND.clone(),
        GERMANY.clone(),
    ]);
}

impl Registry {
    /// Single-region registry holding only Germany
    pub fn germany() -> &'static Registry {
        &GERMANY_REGISTRY
    }

    /// Multi-region registry: Austria, Switzerland, Germany
    pub fn dach() -> &'static Registry {
        &DACH_REGISTRY
    }
}

/// Countries with built-in map artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Germany,
    Austria,
    Switzerland,
}

impl Country {
    /// All countries in detection order
    pub const ALL: [Country; 3] = [Country::Austria, Country::Switzerland, Country::Germany];

    /// Canonical region identifier
    pub fn id(&self) -> &'static str {
        match self {
            Country::Germany => "germany",
            Country::Austria => "austria",
            Country::Switzerland => "switzerland",
        }
    }

    /// German display name, as used on the website
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Germany => "Deutschland",
            Country::Austria => "Österreich",
            Country::Switzerland => "Schweiz",
        }
    }

    /// The built-in region for this country
    pub fn region(&self) -> &'static Region {
        match self {
            Country::Germany => &GERMANY,
            Country::Austria => &AUSTRIA,
            Country::Switzerland => &SWITZERLAND,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Country {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|country| country.id() == s)
            .ok_or_else(|| MapError::UnknownRegion(s.to_string()))
    }
}
