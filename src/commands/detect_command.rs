//! Region detection command

use std::borrow::Cow;
use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::{registry_from_args, required_arg};
use crate::coordinate::{is_valid_region_coordinates, GeoPoint};
use crate::errors::{MapError, MapResult};
use crate::region::{Country, Registry};
use crate::spatial::detect_region;
use crate::utils::coordinate_utils::parse_geo_point;
use crate::utils::logger::Logger;

/// Command for reporting which region a coordinate belongs to
pub struct DetectCommand<'a> {
    point: GeoPoint,
    registry: Cow<'static, Registry>,
    logger: &'a Logger,
}

impl<'a> DetectCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        Ok(DetectCommand {
            point: parse_geo_point(&required_arg(args, "coordinate")?)?,
            registry: registry_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for DetectCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let region = detect_region(self.point.lat, self.point.lng, &self.registry)
            .ok_or_else(|| MapError::GenericError("Region registry is empty".to_string()))?;

        let placement = if is_valid_region_coordinates(self.point.lat, self.point.lng, region) {
            "inside"
        } else {
            "nearest"
        };

        let line = match region.id().parse::<Country>() {
            Ok(country) => format!("{} {} ({})", region.id(), country.display_name(), placement),
            Err(_) => format!("{} ({})", region.id(), placement),
        };
        self.logger.report(&line)?;
        Ok(())
    }
}
