//! Integration tests for the projection pipeline and the CLI commands

extern crate std;

use std::fs;
use std::path::PathBuf;

use dachmap::cli::build_cli;
use dachmap::commands::{CommandFactory, DachmapCommandFactory};
use dachmap::utils::logger::Logger;
use dachmap::{
    detect_region, distance_km, find_nearest, geo_to_planar, planar_to_geo, Country, GeoPoint,
    Location, LocationConverter, Registry, Temple,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dachmap_{}_{}", std::process::id(), name))
}

fn fixture_temples() -> Vec<Temple> {
    vec![
        Temple::new("ISKCON Berlin", "berlin", 52.52, 13.405).with_id("t1"),
        Temple::new("ISKCON München", "muenchen", 48.1351, 11.5820).with_region("Deutschland"),
        Temple::new("ISKCON Wien", "wien", 48.2082, 16.3738).with_region("Österreich"),
        Temple::new("ISKCON Zürich", "zuerich", 47.3769, 8.5417),
        Temple::new("Former Centre", "former", 50.1109, 8.6821).with_active(false),
    ]
}

#[test]
fn test_berlin_projection_scenario() {
    let germany = Registry::germany().get("germany").unwrap();
    let point = geo_to_planar(52.52, 13.405, germany);

    std::assert!(point.x > 0.0 && point.x < germany.canvas().width);
    std::assert!(point.y < germany.canvas().height / 2.0);

    let back = planar_to_geo(point.x, point.y, germany);
    std::assert!((back.lat - 52.52).abs() < 0.001);
    std::assert!((back.lng - 13.405).abs() < 0.001);
}

#[test]
fn test_berlin_munich_distance_scenario() {
    let d = distance_km(52.52, 13.405, 48.1351, 11.5820);
    std::assert!((d - 504.0).abs() <= 5.0, "got {}", d);
}

#[test]
fn test_alias_overrides_geometry_scenario() {
    let temple = Temple::new("Grenzfall", "grenzfall", 47.6, 12.0).with_region("Austria");
    let location = LocationConverter::multi(Registry::dach()).to_location(&temple).unwrap();
    std::assert_eq!(location.region.as_deref(), Some("austria"));
}

#[test]
fn test_inactive_filter_scenario() {
    let temples = vec![
        Temple::new("Active", "active", 52.52, 13.405),
        Temple::new("Inactive", "inactive", 52.52, 13.405).with_active(false),
    ];
    let locations = LocationConverter::single(Country::Germany.region()).to_locations(&temples);
    std::assert_eq!(locations.len(), 1);
}

#[test]
fn test_far_point_detection_scenario() {
    let region = detect_region(0.0, 0.0, Registry::dach());
    std::assert!(region.is_some());
}

#[test]
fn test_nearest_location_after_conversion() {
    let locations = LocationConverter::multi(Registry::dach()).to_locations(&fixture_temples());
    std::assert_eq!(locations.len(), 4);

    // Salzburg is closest to the Munich temple
    let nearest = find_nearest(GeoPoint::new(47.8095, 13.0550), &locations).unwrap();
    std::assert_eq!(nearest.entity.slug, "muenchen");
    std::assert_eq!(nearest.entity.region.as_deref(), Some("germany"));
}

#[test]
fn test_convert_command_writes_locations() {
    let input = temp_path("convert_in.json");
    let output = temp_path("convert_out.json");
    fs::write(&input, serde_json::to_string(&fixture_temples()).unwrap()).unwrap();

    let matches = build_cli().get_matches_from(vec![
        "dachmap", "convert", input.to_str().unwrap(),
        "-o", output.to_str().unwrap(), "--quiet",
    ]);

    let logger = Logger::console();
    let command = DachmapCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    let written: Vec<Location> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let slugs: Vec<&str> = written.iter().map(|l| l.slug.as_str()).collect();
    std::assert_eq!(slugs, vec!["berlin", "muenchen", "wien", "zuerich"]);
    std::assert_eq!(written[0].id, "t1");
    std::assert_eq!(written[3].region.as_deref(), Some("switzerland"));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn test_convert_single_registry_omits_region() {
    let input = temp_path("single_in.json");
    let output = temp_path("single_out.json");
    fs::write(&input, serde_json::to_string(&fixture_temples()).unwrap()).unwrap();

    let matches = build_cli().get_matches_from(vec![
        "dachmap", "--single", "convert", input.to_str().unwrap(),
        "-o", output.to_str().unwrap(), "-q",
    ]);

    let logger = Logger::console();
    let command = DachmapCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    let written: Vec<Location> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    std::assert_eq!(written.len(), 4);
    std::assert!(written.iter().all(|l| l.region.is_none()));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}

#[test]
fn test_custom_registry_from_file() {
    let regions = temp_path("regions.toml");
    fs::write(&regions, r#"
        [[region]]
        id = "square"
        width = 100.0
        height = 100.0
        north = 10.0
        south = 0.0
        east = 10.0
        west = 0.0
    "#).unwrap();

    let registry = Registry::from_file(regions.to_str().unwrap()).unwrap();
    let square = registry.get("square").unwrap();
    let point = geo_to_planar(5.0, 2.5, square);
    std::assert_eq!((point.x, point.y), (25.0, 50.0));

    let matches = build_cli().get_matches_from(vec![
        "dachmap", "--regions", regions.to_str().unwrap(),
        "project", "--coordinate", "5,2.5",
    ]);
    let logger = Logger::console();
    let command = DachmapCommandFactory::new().create_command(&matches, &logger).unwrap();
    std::assert!(command.execute().is_ok());

    let _ = fs::remove_file(&regions);
}

#[test]
fn test_unknown_region_is_reported() {
    let matches = build_cli().get_matches_from(vec![
        "dachmap", "unproject", "--point", "10,10", "--region", "france",
    ]);
    let logger = Logger::console();
    let command = DachmapCommandFactory::new().create_command(&matches, &logger).unwrap();
    std::assert!(matches!(command.execute(), Err(dachmap::MapError::UnknownRegion(_))));
}

#[test]
fn test_malformed_coordinate_rejected() {
    let matches = build_cli().get_matches_from(vec![
        "dachmap", "distance", "--from", "52.52", "--to", "48.1,11.5",
    ]);
    let logger = Logger::console();
    let result = DachmapCommandFactory::new().create_command(&matches, &logger);
    std::assert!(matches!(result, Err(dachmap::MapError::ParseError(_))));
}

#[test]
fn test_missing_input_file() {
    let matches = build_cli().get_matches_from(vec![
        "dachmap", "nearest", "/nonexistent/dachmap.json", "--coordinate", "52.5,13.4",
    ]);
    let logger = Logger::console();
    let command = DachmapCommandFactory::new().create_command(&matches, &logger).unwrap();
    std::assert!(matches!(command.execute(), Err(dachmap::MapError::IoError(_))));
}

fn run_with_results(args: Vec<&str>, name: &str) -> String {
    let results = temp_path(name);
    let logger = Logger::new(results.to_str().unwrap()).unwrap();

    let matches = build_cli().get_matches_from(args);
    let command = DachmapCommandFactory::new().create_command(&matches, &logger).unwrap();
    command.execute().unwrap();

    let contents = fs::read_to_string(&results).unwrap();
    let _ = fs::remove_file(&results);
    contents
}

fn write_nearest_fixture(name: &str) -> PathBuf {
    let mut temples = fixture_temples();
    // Inactive temple sitting right on the search origin
    temples.push(Temple::new("Closed Salzburg", "salzburg", 47.8095, 13.0550).with_active(false));

    let path = temp_path(name);
    fs::write(&path, serde_json::to_string(&temples).unwrap()).unwrap();
    path
}

#[test]
fn test_detect_command_inside_and_nearest() {
    let inside = run_with_results(
        vec!["dachmap", "detect", "--coordinate", "52.52,13.405"], "detect_inside.txt");
    std::assert_eq!(inside, "germany Deutschland (inside)\n");

    let nearest = run_with_results(
        vec!["dachmap", "detect", "--coordinate", "0,0"], "detect_nearest.txt");
    std::assert_eq!(nearest, "switzerland Schweiz (nearest)\n");
}

#[test]
fn test_nearest_command_skips_inactive() {
    let input = write_nearest_fixture("nearest_in.json");

    let output = run_with_results(vec![
        "dachmap", "nearest", input.to_str().unwrap(), "--coordinate", "47.8095,13.055",
    ], "nearest_out.txt");

    std::assert!(output.starts_with("ISKCON München (muenchen) "), "{}", output);
    std::assert!(!output.contains("salzburg"));
    std::assert_eq!(output.lines().count(), 1);

    let _ = fs::remove_file(&input);
}

#[test]
fn test_nearest_command_with_radius() {
    let input = write_nearest_fixture("radius_in.json");

    let output = run_with_results(vec![
        "dachmap", "nearest", input.to_str().unwrap(),
        "--coordinate", "47.8095,13.055", "--radius", "150",
    ], "radius_out.txt");
    let lines: Vec<&str> = output.lines().collect();
    std::assert_eq!(lines.len(), 1, "{}", output);
    std::assert!(lines[0].contains("(muenchen)"));
    std::assert!(lines[0].ends_with(" km"));

    let wide = run_with_results(vec![
        "dachmap", "nearest", input.to_str().unwrap(),
        "--coordinate", "47.8095,13.055", "--radius", "300",
    ], "radius_wide.txt");
    let slugs: Vec<&str> = wide.lines()
        .map(|l| l.split(['(', ')']).nth(1).unwrap_or(""))
        .collect();
    std::assert_eq!(slugs, vec!["muenchen", "wien"]);

    let empty = run_with_results(vec![
        "dachmap", "nearest", input.to_str().unwrap(),
        "--coordinate", "47.8095,13.055", "--radius", "1",
    ], "radius_empty.txt");
    std::assert_eq!(empty, "No temple within 1 km\n");

    let _ = fs::remove_file(&input);
}

#[test]
fn test_nearest_command_invalid_radius() {
    let matches = build_cli().get_matches_from(vec![
        "dachmap", "nearest", "temples.json", "--coordinate", "47.8,13.0", "--radius", "far",
    ]);
    let logger = Logger::console();
    let result = DachmapCommandFactory::new().create_command(&matches, &logger);
    std::assert!(matches!(result, Err(dachmap::MapError::ParseError(_))));
}

#[test]
fn test_convert_command_skips_bad_entries() {
    let input = temp_path("bad_entries_in.json");
    let output = temp_path("bad_entries_out.json");
    fs::write(&input, r#"[
        {"name": "A", "slug": "a", "location": {"lat": 52.52, "lng": 13.405}},
        {"name": "B", "slug": "b", "location": null},
        {"name": "C", "slug": "c",
         "location": {"lat": 48.2, "lng": 16.37, "region": "AT", "country": "Österreich"}}
    ]"#).unwrap();

    run_with_results(vec![
        "dachmap", "convert", input.to_str().unwrap(), "-o", output.to_str().unwrap(), "-q",
    ], "bad_entries_results.txt");

    let written: Vec<Location> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let slugs: Vec<&str> = written.iter().map(|l| l.slug.as_str()).collect();
    std::assert_eq!(slugs, vec!["a", "c"]);
    std::assert_eq!(written[1].region.as_deref(), Some("austria"));

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
}
