//! Per-segment summary report.

use std::collections::HashMap;
use std::path::Path;

use super::open_writer;
use super::types::SegmentSummary;
use crate::config::CITY_LIST_SEPARATOR;
use crate::error_handling::ExportError;
use crate::models::Row;
use crate::pipeline::normalize;

/// Groups retained rows by segment, in order of first appearance.
///
/// Every segment with at least one retained row gets a summary, even if none
/// of its rows resolved to a city.
pub fn summarize_segments(rows: &[Row]) -> Vec<SegmentSummary> {
    let mut summaries: Vec<SegmentSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.segment.as_str()).or_insert_with(|| {
            summaries.push(SegmentSummary {
                segment: row.segment.clone(),
                ..Default::default()
            });
            summaries.len() - 1
        });
        if let Some(city) = row.city() {
            summaries[slot].cities.push(city.to_string());
        }
    }

    for summary in &mut summaries {
        summary.breakdown = breakdown(&summary.cities);
    }
    summaries
}

fn breakdown(cities: &[String]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for city in cities {
        let key = normalize(Some(city));
        if let Some(&i) = positions.get(&key) {
            counts[i].1 += 1;
        } else {
            positions.insert(key, counts.len());
            counts.push((city.clone(), 1));
        }
    }
    counts
}

/// Writes the summary with header `placemark,first_city,last_city,cities,city_count`,
/// plus `city_breakdown` when `with_breakdown` is set.
pub fn write_segments_csv(
    path: &Path,
    summaries: &[SegmentSummary],
    with_breakdown: bool,
) -> Result<usize, ExportError> {
    let mut writer = open_writer(path)?;
    let mut header = vec!["placemark", "first_city", "last_city", "cities", "city_count"];
    if with_breakdown {
        header.push("city_breakdown");
    }
    writer.write_record(&header)?;

    for summary in summaries {
        let mut record = vec![
            summary.segment.clone(),
            summary.first_city().unwrap_or_default().to_string(),
            summary.last_city().unwrap_or_default().to_string(),
            summary.cities.join(CITY_LIST_SEPARATOR),
            summary.city_count().to_string(),
        ];
        if with_breakdown {
            record.push(
                summary
                    .breakdown
                    .iter()
                    .map(|(city, count)| format!("{city}: {count}"))
                    .collect::<Vec<_>>()
                    .join(CITY_LIST_SEPARATOR),
            );
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(summaries.len())
}
