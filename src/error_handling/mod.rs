//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for fatal failures (initialization, input, output)
//! - Lookup failure categories and their statistics
//! - Retry strategy configuration for online lookups
//!
//! Fatal errors abort the run. Lookup failures never do: they are counted and
//! the affected point keeps empty place fields.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status, get_retry_strategy};
pub use stats::LookupStats;
pub use types::{ExportError, GazetteerError, InitializationError, KmlError, LookupError};
