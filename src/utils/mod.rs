//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting, rounding and
//! coordinate-string parsing used throughout the application.

pub mod logger;
pub mod progress;
pub mod format_utils;
pub mod coordinate_utils;
