//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{LookupError, LookupStats};
use crate::pipeline::SequencerStats;

/// Logs how the filters treated the extracted points.
pub fn print_sequencer_statistics(stats: &SequencerStats) {
    info!(
        "Points: {} seen, {} sampled out, {} over segment cap, {} geocoded, {} duplicates, {} retained",
        stats.points_seen,
        stats.sampled_out,
        stats.capped,
        stats.geocoded,
        stats.duplicates,
        stats.retained
    );
}

/// Logs lookup outcomes, with a per-category breakdown of failures.
pub fn print_lookup_statistics(stats: &LookupStats) {
    info!(
        "Lookups: {} resolved, {} without a place, {} retries",
        stats.resolved(),
        stats.total_failures(),
        stats.retries()
    );

    let total_failures = stats.total_failures();
    if total_failures > 0 {
        info!("Lookup Failure Counts ({} total):", total_failures);
        for failure in LookupError::iter() {
            let count = stats.get_failure_count(failure);
            if count > 0 {
                info!("   {}: {}", failure.as_str(), count);
            }
        }
    }
}
