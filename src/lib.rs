pub mod errors;
pub mod coordinate;
pub mod region;
pub mod spatial;
pub mod location;
pub mod utils;
pub mod commands;
pub mod cli;

pub use errors::{MapError, MapResult};
pub use coordinate::{
    geo_to_planar, is_valid_planar_coordinates, is_valid_region_coordinates, planar_to_geo,
    CanvasSize, GeoBounds, GeoPoint, PlanarPoint,
};
pub use region::{resolve_alias, Country, Region, Registry};
pub use spatial::{detect_region, distance_km, find_nearest, within_radius, Located, Nearest};
pub use location::{read_temple_array, Location, LocationConverter, Temple, TempleLocation};
