//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, retry policy, exit codes, defaults)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, DedupOn, GeocodeMode, LogFormat, LogLevel};
