//! Bounds registry
//!
//! Maps region identifiers to canvas sizes and geographic boxes. The
//! built-in registries are process-wide constants; custom ones can be
//! loaded from TOML.

mod alias;
mod config;
mod country;
mod registry;

pub use self::alias::{aliases, resolve_alias};
pub use self::country::Country;
pub use self::registry::{Region, Registry};
