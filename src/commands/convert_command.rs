//! Temple to location conversion command
//!
//! Reads a JSON array of temples and writes the map-ready locations as a
//! JSON array, to a file or stdout.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{lookup_region, read_temples, registry_from_args, required_arg};
use crate::errors::MapResult;
use crate::location::{Location, LocationConverter};
use crate::region::Registry;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for converting temples into map locations
pub struct ConvertCommand<'a> {
    /// Path to the input JSON file
    input_file: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Fixed region for single-map output
    region_id: Option<String>,
    /// Whether to draw a progress bar
    show_progress: bool,
    registry: Cow<'static, Registry>,
    /// Logger for recording results
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `logger` - Logger for recording results
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MapResult<Self> {
        let input_file = required_arg(args, "input")?;
        info!("Input file: {}", input_file);

        Ok(ConvertCommand {
            input_file,
            output_file: args.get_one::<String>("output").cloned(),
            region_id: args.get_one::<String>("region").cloned(),
            show_progress: !args.get_flag("quiet"),
            registry: registry_from_args(args)?,
            logger,
        })
    }

    /// Pick the converter variant
    ///
    /// An explicit region, or a registry holding exactly one region, selects
    /// the single-map converter; otherwise regions are resolved per temple.
    fn converter(&self) -> MapResult<LocationConverter<'_>> {
        if let Some(id) = &self.region_id {
            return Ok(LocationConverter::single(lookup_region(&self.registry, id)?));
        }

        match self.registry.iter().next() {
            Some(only) if self.registry.len() == 1 => Ok(LocationConverter::single(only)),
            _ => Ok(LocationConverter::multi(&self.registry)),
        }
    }

    fn write_locations(&self, locations: &[Location]) -> MapResult<()> {
        match &self.output_file {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(&mut writer, locations)?;
                writeln!(writer)?;
                writer.flush()?;
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                serde_json::to_writer_pretty(&mut writer, locations)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> MapResult<()> {
        let temples = read_temples(&self.input_file)?;
        let converter = self.converter()?;

        let progress = if self.show_progress {
            ProgressTracker::new(temples.len() as u64, "Projecting temples")
        } else {
            ProgressTracker::hidden()
        };

        let locations = converter.to_locations_observed(&temples, |_, _| progress.increment(1));
        progress.finish(&format!("{} locations", locations.len()));

        self.write_locations(&locations)?;

        let summary = format!("Converted {} of {} temples from {}",
                              locations.len(), temples.len(), self.input_file);
        match &self.output_file {
            Some(path) => self.logger.report(&format!("{} into {}", summary, path))?,
            None => self.logger.log(&summary)?,
        }
        Ok(())
    }
}
