//! Canvas to geographic conversion command

use std::borrow::Cow;
use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::{lookup_region, registry_from_args, required_arg};
use crate::coordinate::{planar_to_geo, PlanarPoint};
use crate::errors::MapResult;
use crate::region::Registry;
use crate::utils::coordinate_utils::parse_planar_point;
use crate::utils::format_utils::format_geo;
use crate::utils::logger::Logger;

/// Command for converting a canvas point back to latitude/longitude
pub struct UnprojectCommand<'a> {
    point: PlanarPoint,
    region_id: String,
    registry: Cow<'static, Registry>,
    logger: &'a Logger,
}

impl<'a> UnprojectCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        Ok(UnprojectCommand {
            point: parse_planar_point(&required_arg(args, "point")?)?,
            region_id: required_arg(args, "region")?,
            registry: registry_from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for UnprojectCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let region = lookup_region(&self.registry, &self.region_id)?;
        let geo = planar_to_geo(self.point.x, self.point.y, region);
        self.logger.report(&format!("{} {}", region.id(), format_geo(&geo)))?;
        Ok(())
    }
}
