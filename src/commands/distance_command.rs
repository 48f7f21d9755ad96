//! Great-circle distance command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::required_arg;
use crate::coordinate::GeoPoint;
use crate::errors::MapResult;
use crate::spatial::distance_km;
use crate::utils::coordinate_utils::parse_geo_point;
use crate::utils::logger::Logger;

/// Command for measuring the distance between two coordinates
pub struct DistanceCommand<'a> {
    from: GeoPoint,
    to: GeoPoint,
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        Ok(DistanceCommand {
            from: parse_geo_point(&required_arg(args, "from")?)?,
            to: parse_geo_point(&required_arg(args, "to")?)?,
            logger,
        })
    }

    /// Distance in kilometers, rounded to 2 dp
    pub fn distance(&self) -> f64 {
        distance_km(self.from.lat, self.from.lng, self.to.lat, self.to.lng)
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        self.logger.report(&format!("{:.2} km", self.distance()))?;
        Ok(())
    }
}
