//! Geographic to canvas projection command

use clap::ArgMatches;
use log::{debug, warn};

use crate::commands::command_traits::Command;
use crate::commands::{lookup_region, registry_from_args, required_arg};
use crate::coordinate::{geo_to_planar, is_valid_region_coordinates, GeoPoint};
use crate::errors::{MapError, MapResult};
use crate::region::Registry;
use crate::spatial::detect_region;
use crate::utils::coordinate_utils::parse_geo_point;
use crate::utils::format_utils::format_planar;
use crate::utils::logger::Logger;

/// Command for projecting a coordinate onto a region's canvas
pub struct ProjectCommand<'a> {
    /// Coordinate to project
    point: GeoPoint,
    /// Explicit region id, detected when absent
    region_id: Option<String>,
    registry: std::borrow::Cow<'static, Registry>,
    /// Logger for recording results
    logger: &'a Logger,
}

impl<'a> ProjectCommand<'a> {
    /// Create a new project command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `logger` - Logger for recording results
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let point = parse_geo_point(&required_arg(args, "coordinate")?)?;
        let region_id = args.get_one::<String>("region").cloned();
        let registry = registry_from_args(args)?;

        debug!("Project {} (region: {:?})", point, region_id);

        Ok(ProjectCommand {
            point,
            region_id,
            registry,
            logger,
        })
    }
}

impl<'a> Command for ProjectCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let region = match &self.region_id {
            Some(id) => lookup_region(&self.registry, id)?,
            None => detect_region(self.point.lat, self.point.lng, &self.registry)
                .ok_or_else(|| MapError::GenericError("Region registry is empty".to_string()))?,
        };

        if self.region_id.is_none() && !is_valid_region_coordinates(self.point.lat, self.point.lng, region) {
            warn!("{} is outside every region, using nearest region '{}'", self.point, region.id());
        }

        let planar = geo_to_planar(self.point.lat, self.point.lng, region);
        self.logger.report(&format!("{} {}", region.id(), format_planar(&planar)))?;
        Ok(())
    }
}
