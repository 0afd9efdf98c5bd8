//! CSV report writers.
//!
//! Three reports are derived from the retained rows:
//! - the primary trace (always written)
//! - a city-only sequence (optional)
//! - a per-segment summary (optional)
//!
//! Absent place fields are written as empty cells.

mod cities;
mod segments;
mod trace;
mod types;

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error_handling::ExportError;

pub use cities::{city_sequence, write_cities_csv};
pub use segments::{summarize_segments, write_segments_csv};
pub use trace::write_trace_csv;
pub use types::{CityEntry, CityMode, SegmentSummary};

fn open_writer(path: &Path) -> Result<Writer<File>, ExportError> {
    Writer::from_path(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests;
