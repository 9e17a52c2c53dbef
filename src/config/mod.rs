//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, default selectors, layout widths)
//! - CLI option types and parsing
//! - The library `Config` built from parsed options

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
