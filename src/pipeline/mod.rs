//! Sequencer and filter pipeline.
//!
//! Drives extracted points through sampling, the per-segment cap, geocoding
//! and consecutive-duplicate suppression, one point at a time.

mod dedup;
mod sequencer;

use std::time::Instant;

use log::debug;

use crate::app::log_progress;
use crate::config::LOGGING_INTERVAL;
use crate::geocode::ReverseGeocoder;
use crate::models::{Point, Row};

pub use dedup::{normalize, DedupKey};
pub use sequencer::{Sequencer, SequencerOptions, SequencerState, SequencerStats};

/// Runs every point through a fresh [`Sequencer`].
///
/// Geocoding calls are awaited one at a time, in extraction order. A progress
/// line is logged every `LOGGING_INTERVAL` points.
pub async fn run_pipeline<G: ReverseGeocoder>(
    points: Vec<Point>,
    geocoder: &G,
    options: SequencerOptions,
) -> (Vec<Row>, SequencerStats) {
    let start_time = Instant::now();
    let total = points.len();
    let mut sequencer = Sequencer::new(options);

    for (index, point) in points.into_iter().enumerate() {
        sequencer.push(index, point, geocoder).await;
        let processed = index + 1;
        if processed % LOGGING_INTERVAL == 0 && processed < total {
            log_progress(start_time, processed, total);
            let stats = sequencer.stats();
            debug!(
                "{} rows retained so far, {} duplicates suppressed",
                stats.retained, stats.duplicates
            );
        }
    }

    log_progress(start_time, total, total);
    sequencer.finish()
}
