//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod project_command;
pub mod unproject_command;
pub mod detect_command;
pub mod distance_command;
pub mod convert_command;
pub mod nearest_command;

pub use command_traits::{Command, CommandFactory};
pub use project_command::ProjectCommand;
pub use unproject_command::UnprojectCommand;
pub use detect_command::DetectCommand;
pub use distance_command::DistanceCommand;
pub use convert_command::ConvertCommand;
pub use nearest_command::NearestCommand;

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use clap::ArgMatches;
use log::info;

use crate::errors::{MapError, MapResult};
use crate::location::{read_temple_array, Temple};
use crate::region::{Region, Registry};
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct DachmapCommandFactory;

impl DachmapCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        DachmapCommandFactory
    }
}

impl Default for DachmapCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for DachmapCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MapResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("project", sub)) => Ok(Box::new(ProjectCommand::new(sub, logger)?)),
            Some(("unproject", sub)) => Ok(Box::new(UnprojectCommand::new(sub, logger)?)),
            Some(("detect", sub)) => Ok(Box::new(DetectCommand::new(sub, logger)?)),
            Some(("distance", sub)) => Ok(Box::new(DistanceCommand::new(sub, logger)?)),
            Some(("convert", sub)) => Ok(Box::new(ConvertCommand::new(sub, logger)?)),
            Some(("nearest", sub)) => Ok(Box::new(NearestCommand::new(sub, logger)?)),
            Some((name, _)) => Err(MapError::GenericError(format!("Unknown command: {}", name))),
            None => Err(MapError::GenericError("No command given, see --help".to_string())),
        }
    }
}

/// Fetch a required string argument
pub(crate) fn required_arg(args: &ArgMatches, name: &str) -> MapResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| MapError::GenericError(format!("Missing --{}", name)))
}

/// The registry selected by `--regions FILE` / `--single`, DACH otherwise
pub(crate) fn registry_from_args(args: &ArgMatches) -> MapResult<Cow<'static, Registry>> {
    if let Some(path) = args.get_one::<String>("regions") {
        return Ok(Cow::Owned(Registry::from_file(path)?));
    }

    if args.get_flag("single") {
        Ok(Cow::Borrowed(Registry::germany()))
    } else {
        Ok(Cow::Borrowed(Registry::dach()))
    }
}

/// Resolve a region id against a registry
pub(crate) fn lookup_region<'r>(registry: &'r Registry, id: &str) -> MapResult<&'r Region> {
    registry.get(id).ok_or_else(|| MapError::UnknownRegion(format!(
        "{} (known: {})", id, registry.ids().join(", "))))
}

/// Read a JSON array of temples; unparsable entries are skipped
pub(crate) fn read_temples(path: &str) -> MapResult<Vec<Temple>> {
    let file = File::open(path)?;
    let temples = read_temple_array(BufReader::new(file))?;
    info!("Read {} temples from {}", temples.len(), path);
    Ok(temples)
}
