//! Spatial helpers: distance, region detection and neighbour search

mod detect;
mod distance;
mod nearest;

pub use self::detect::detect_region;
pub use self::distance::{distance_km, EARTH_RADIUS_KM};
pub use self::nearest::{find_nearest, within_radius, Located, Nearest};
