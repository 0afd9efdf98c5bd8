//! Primary report: one row per retained point.

use std::path::Path;

use serde::Serialize;

use super::open_writer;
use crate::error_handling::ExportError;
use crate::models::Row;

#[derive(Serialize)]
struct TraceRecord<'a> {
    seq: usize,
    placemark: &'a str,
    lat: f64,
    lon: f64,
    city: Option<&'a str>,
    admin: Option<&'a str>,
    country: Option<&'a str>,
}

impl<'a> From<&'a Row> for TraceRecord<'a> {
    fn from(row: &'a Row) -> Self {
        Self {
            seq: row.seq,
            placemark: &row.segment,
            lat: row.latitude,
            lon: row.longitude,
            city: row.place.city.as_deref(),
            admin: row.place.admin.as_deref(),
            country: row.place.country.as_deref(),
        }
    }
}

/// Writes retained rows in order with header
/// `seq,placemark,lat,lon,city,admin,country`.
///
/// Returns the number of data rows written.
pub fn write_trace_csv(path: &Path, rows: &[Row]) -> Result<usize, ExportError> {
    let mut writer = open_writer(path)?;
    if rows.is_empty() {
        writer.write_record(["seq", "placemark", "lat", "lon", "city", "admin", "country"])?;
    }
    for row in rows {
        writer.serialize(TraceRecord::from(row))?;
    }
    writer.flush()?;
    Ok(rows.len())
}
