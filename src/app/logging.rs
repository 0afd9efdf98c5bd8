//! Progress logging utilities.

use std::time::Instant;

use log::info;

/// Logs how far the pipeline has got through the extracted points.
///
/// # Arguments
///
/// * `start_time` - When processing started
/// * `processed` - Points processed so far
/// * `total` - Points extracted from the document
pub fn log_progress(start_time: Instant, processed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} points in {:.2} seconds (~{:.2} points/sec)",
        processed, total, elapsed_secs, rate
    );
}
