//! Nearest temple lookup command

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::{read_temples, required_arg};
use crate::coordinate::GeoPoint;
use crate::errors::{MapError, MapResult};
use crate::location::Temple;
use crate::spatial::{find_nearest, within_radius};
use crate::utils::coordinate_utils::parse_geo_point;
use crate::utils::logger::Logger;

/// Command for finding the temple closest to a coordinate
pub struct NearestCommand<'a> {
    input_file: String,
    target: GeoPoint,
    /// Report every temple within this many kilometers instead
    radius_km: Option<f64>,
    logger: &'a Logger,
}

impl<'a> NearestCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let radius_km = match args.get_one::<String>("radius") {
            Some(value) => Some(value.trim().parse::<f64>()
                .map_err(|_| MapError::ParseError(format!("Invalid radius: {}", value)))?),
            None => None,
        };

        Ok(NearestCommand {
            input_file: required_arg(args, "input")?,
            target: parse_geo_point(&required_arg(args, "coordinate")?)?,
            radius_km,
            logger,
        })
    }

    fn line(temple: &Temple, distance_km: f64) -> String {
        format!("{} ({}) {:.2} km", temple.name, temple.slug, distance_km)
    }
}

impl<'a> Command for NearestCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let temples: Vec<Temple> = read_temples(&self.input_file)?
            .into_iter()
            .filter(Temple::is_active)
            .collect();
        debug!("Searching {} active temples around {}", temples.len(), self.target);

        match self.radius_km {
            Some(radius) => {
                let hits = within_radius(self.target, &temples, radius);
                if hits.is_empty() {
                    self.logger.report(&format!("No temple within {} km", radius))?;
                }
                for hit in hits {
                    self.logger.report(&Self::line(hit.entity, hit.distance_km))?;
                }
            }
            None => match find_nearest(self.target, &temples) {
                Some(nearest) => self.logger.report(&Self::line(nearest.entity, nearest.distance_km))?,
                None => self.logger.report("No active temples in input")?,
            },
        }
        Ok(())
    }
}
