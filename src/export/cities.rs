//! City-only report.

use std::collections::HashSet;
use std::path::Path;

use super::open_writer;
use super::types::{CityEntry, CityMode};
use crate::error_handling::ExportError;
use crate::models::Row;
use crate::pipeline::normalize;

/// Derives the city-only sequence from retained rows.
///
/// Rows without a city are skipped. Repeats are judged on the normalized name
/// and independently of any dedup the pipeline already applied.
pub fn city_sequence(rows: &[Row], mode: CityMode) -> Vec<CityEntry> {
    let mut seen = HashSet::new();
    let mut previous: Option<String> = None;
    let mut entries = Vec::new();

    for row in rows {
        let Some(city) = row.city() else {
            continue;
        };
        let key = normalize(Some(city));
        let keep = match mode {
            CityMode::GlobalUnique => seen.insert(key),
            CityMode::Consecutive => {
                if previous.as_deref() == Some(key.as_str()) {
                    false
                } else {
                    previous = Some(key);
                    true
                }
            }
        };
        if keep {
            entries.push(CityEntry {
                order: entries.len(),
                city: city.to_string(),
                seq: row.seq,
                segment: row.segment.clone(),
            });
        }
    }

    entries
}

/// Writes the city-only report with header `order,city,seq,placemark`.
pub fn write_cities_csv(path: &Path, entries: &[CityEntry]) -> Result<usize, ExportError> {
    let mut writer = open_writer(path)?;
    writer.write_record(["order", "city", "seq", "placemark"])?;
    for entry in entries {
        writer.write_record([
            entry.order.to_string().as_str(),
            entry.city.as_str(),
            entry.seq.to_string().as_str(),
            entry.segment.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(entries.len())
}
