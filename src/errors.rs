//! Custom error types for map projection and location handling

use std::fmt;
use std::io;

/// Errors raised by the CLI and the registry loader
///
/// Out-of-bounds coordinates are never reported through this type; they
/// are logged and answered with a best-effort result instead.
#[derive(Debug)]
pub enum MapError {
    /// I/O error
    IoError(io::Error),
    /// Malformed coordinate or number on input
    ParseError(String),
    /// Invalid region registry configuration
    ConfigError(String),
    /// Malformed JSON document
    JsonError(serde_json::Error),
    /// Region identifier absent from the registry
    UnknownRegion(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::IoError(e) => write!(f, "I/O error: {}", e),
            MapError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            MapError::ConfigError(msg) => write!(f, "Invalid region configuration: {}", msg),
            MapError::JsonError(e) => write!(f, "JSON error: {}", e),
            MapError::UnknownRegion(id) => write!(f, "Unknown region: {}", id),
            MapError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::IoError(e) => Some(e),
            MapError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(error: io::Error) -> Self {
        MapError::IoError(error)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(error: serde_json::Error) -> Self {
        MapError::JsonError(error)
    }
}

impl From<String> for MapError {
    fn from(msg: String) -> Self {
        MapError::GenericError(msg)
    }
}

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;
