//! Coordinate string parsing
//!
//! CLI arguments carry coordinates as "a,b" pairs: "lat,lng" for
//! geographic points and "x,y" for canvas points.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::{GeoPoint, PlanarPoint};
use crate::errors::{MapError, MapResult};

lazy_static! {
    static ref PAIR_PATTERN: Regex = Regex::new(
        r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))\s*,\s*([+-]?(?:\d+\.?\d*|\.\d+))\s*$"
    ).expect("coordinate pair pattern is valid");
}

/// Parse a "a,b" pair of decimal numbers
pub fn parse_pair(input: &str) -> MapResult<(f64, f64)> {
    let captures = PAIR_PATTERN.captures(input).ok_or_else(|| {
        MapError::ParseError(format!("Expected two comma-separated numbers, got '{}'", input))
    })?;

    let first = captures[1].parse::<f64>()
        .map_err(|_| MapError::ParseError(format!("Invalid number '{}'", &captures[1])))?;
    let second = captures[2].parse::<f64>()
        .map_err(|_| MapError::ParseError(format!("Invalid number '{}'", &captures[2])))?;

    debug!("Parsed pair '{}' as ({}, {})", input, first, second);
    Ok((first, second))
}

/// Parse a "lat,lng" string
pub fn parse_geo_point(input: &str) -> MapResult<GeoPoint> {
    let (lat, lng) = parse_pair(input)?;
    Ok(GeoPoint::new(lat, lng))
}

/// Parse an "x,y" string
pub fn parse_planar_point(input: &str) -> MapResult<PlanarPoint> {
    let (x, y) = parse_pair(input)?;
    Ok(PlanarPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geo_point() {
        let berlin = parse_geo_point("52.52,13.405").unwrap();
        assert_eq!(berlin, GeoPoint::new(52.52, 13.405));

        let spaced = parse_geo_point("  -33.9 ,  +18.42 ").unwrap();
        assert_eq!(spaced, GeoPoint::new(-33.9, 18.42));

        assert_eq!(parse_geo_point("0,0").unwrap(), GeoPoint::new(0.0, 0.0));
        assert_eq!(parse_geo_point(".5,7.").unwrap(), GeoPoint::new(0.5, 7.0));
    }

    #[test]
    fn test_parse_planar_point() {
        assert_eq!(parse_planar_point("481.1,257.8").unwrap(), PlanarPoint::new(481.1, 257.8));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "52.52", "52.52;13.4", "a,b", "1,2,3", "1.2.3,4", "--1,2"] {
            assert!(
                matches!(parse_pair(input), Err(MapError::ParseError(_))),
                "accepted {:?}", input
            );
        }
    }
}
