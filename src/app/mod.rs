//! Main application modules.
//!
//! Progress and statistics logging used while a run is in flight and when it
//! finishes.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_lookup_statistics, print_sequencer_statistics};
