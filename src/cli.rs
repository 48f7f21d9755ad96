//! Command-line argument definition

use clap::{Arg, ArgAction, Command as ClapCommand};

fn coordinate_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("LAT,LNG")
        .allow_hyphen_values(true)
        .required(true)
}

/// Build the `dachmap` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("dachmap")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Project coordinates onto stylized DACH country maps")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records and results to this file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("regions")
                .long("regions")
                .help("Load the region registry from a TOML file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("single")
                .long("single")
                .help("Use the Germany-only registry")
                .global(true)
                .conflicts_with("regions")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("project")
                .about("Convert a latitude/longitude to canvas coordinates")
                .arg(coordinate_arg("coordinate", "Coordinate to project"))
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Region id; detected from the coordinate when omitted")
                        .value_name("ID"),
                ),
        )
        .subcommand(
            ClapCommand::new("unproject")
                .about("Convert canvas coordinates to latitude/longitude")
                .arg(
                    Arg::new("point")
                        .long("point")
                        .help("Canvas point")
                        .value_name("X,Y")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Region id")
                        .value_name("ID")
                        .required(true),
                ),
        )
        .subcommand(
            ClapCommand::new("detect")
                .about("Report the region a coordinate belongs to")
                .arg(coordinate_arg("coordinate", "Coordinate to locate")),
        )
        .subcommand(
            ClapCommand::new("distance")
                .about("Great-circle distance between two coordinates")
                .arg(coordinate_arg("from", "Start coordinate"))
                .arg(coordinate_arg("to", "End coordinate")),
        )
        .subcommand(
            ClapCommand::new("convert")
                .about("Convert a JSON array of temples into map locations")
                .arg(
                    Arg::new("input")
                        .help("Input JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output JSON file, stdout when omitted")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Project every temple onto this region's map")
                        .value_name("ID"),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Do not draw a progress bar")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            ClapCommand::new("nearest")
                .about("Find the active temple closest to a coordinate")
                .arg(
                    Arg::new("input")
                        .help("Input JSON file")
                        .required(true)
                        .index(1),
                )
                .arg(coordinate_arg("coordinate", "Search origin"))
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .help("List every temple within this many kilometers")
                        .value_name("KM"),
                ),
        )
}
