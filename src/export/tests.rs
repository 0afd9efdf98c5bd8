//! Report writer tests.

use std::path::Path;

use super::*;
use crate::error_handling::ExportError;
use crate::models::{GeocodeResult, Row};

fn row(seq: usize, segment: &str, city: Option<&str>) -> Row {
    Row {
        seq,
        segment: segment.to_string(),
        latitude: 48.5,
        longitude: 2.25,
        place: GeocodeResult::new(city, None, None),
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("report readable")
}

fn names(entries: &[CityEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.city.as_str()).collect()
}

#[test]
fn test_trace_csv_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("trace.csv");
    let rows = vec![
        Row {
            seq: 0,
            segment: "Route A".to_string(),
            latitude: 48.5,
            longitude: 2.25,
            place: GeocodeResult::new(Some("Paris"), Some("Île-de-France"), Some("France")),
        },
        row(1, "Route A", None),
    ];

    assert_eq!(write_trace_csv(&path, &rows).expect("written"), 2);
    assert_eq!(
        read(&path),
        "seq,placemark,lat,lon,city,admin,country\n\
         0,Route A,48.5,2.25,Paris,Île-de-France,France\n\
         1,Route A,48.5,2.25,,,\n"
    );
}

#[test]
fn test_trace_csv_empty_still_has_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("trace.csv");
    assert_eq!(write_trace_csv(&path, &[]).expect("written"), 0);
    assert_eq!(read(&path), "seq,placemark,lat,lon,city,admin,country\n");
}

#[test]
fn test_trace_csv_quotes_labels_with_commas() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("trace.csv");
    write_trace_csv(&path, &[row(0, "Paris, day 1", Some("Paris"))]).expect("written");
    assert!(read(&path).contains("0,\"Paris, day 1\",48.5,2.25,Paris,,"));
}

#[test]
fn test_unwritable_output_is_create_error() {
    let result = write_trace_csv(Path::new("/nonexistent/dir/trace.csv"), &[]);
    assert!(matches!(result, Err(ExportError::Create { .. })));
}

#[test]
fn test_city_sequence_consecutive_collapse() {
    let rows = vec![
        row(0, "a", Some("Paris")),
        row(1, "a", Some("paris ")),
        row(2, "a", None),
        row(3, "a", Some("Paris")),
        row(4, "b", Some("Lyon")),
        row(5, "b", Some("Paris")),
    ];
    let entries = city_sequence(&rows, CityMode::Consecutive);
    // The empty row between the two Paris rows does not break the run
    assert_eq!(names(&entries), vec!["Paris", "Lyon", "Paris"]);
    assert_eq!(
        entries.iter().map(|e| (e.order, e.seq)).collect::<Vec<_>>(),
        vec![(0, 0), (1, 4), (2, 5)]
    );
}

#[test]
fn test_city_sequence_global_unique() {
    let rows = vec![
        row(0, "a", Some("Paris")),
        row(1, "a", Some("Lyon")),
        row(2, "b", Some("PARIS")),
        row(3, "b", Some("Marseille")),
        row(4, "b", Some("Lyon")),
    ];
    let entries = city_sequence(&rows, CityMode::GlobalUnique);
    assert_eq!(names(&entries), vec!["Paris", "Lyon", "Marseille"]);
    assert_eq!(entries[2].segment, "b");
    assert_eq!(entries[2].seq, 3);
}

#[test]
fn test_city_mode_from_flag() {
    assert_eq!(CityMode::from_flag(true), CityMode::GlobalUnique);
    assert_eq!(CityMode::from_flag(false), CityMode::Consecutive);
}

#[test]
fn test_cities_csv_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cities.csv");
    let rows = vec![row(0, "placemark_0", Some("Paris")), row(1, "placemark_0", Some("Lyon"))];
    let entries = city_sequence(&rows, CityMode::Consecutive);

    assert_eq!(write_cities_csv(&path, &entries).expect("written"), 2);
    assert_eq!(
        read(&path),
        "order,city,seq,placemark\n0,Paris,0,placemark_0\n1,Lyon,1,placemark_0\n"
    );
}

#[test]
fn test_summarize_segments_in_first_appearance_order() {
    let rows = vec![
        row(0, "b", Some("Lyon")),
        row(1, "a", Some("Paris")),
        row(2, "b", None),
        row(3, "b", Some("Dijon")),
        row(4, "c", None),
        row(5, "a", Some("Paris")),
    ];
    let summaries = summarize_segments(&rows);
    let labels: Vec<&str> = summaries.iter().map(|s| s.segment.as_str()).collect();
    assert_eq!(labels, vec!["b", "a", "c"]);

    assert_eq!(summaries[0].first_city(), Some("Lyon"));
    assert_eq!(summaries[0].last_city(), Some("Dijon"));
    assert_eq!(summaries[0].city_count(), 2);
    assert_eq!(summaries[1].city_count(), 2);
    assert_eq!(summaries[2].city_count(), 0);
    assert_eq!(summaries[2].first_city(), None);
}

#[test]
fn test_segment_breakdown_groups_case_insensitively() {
    let rows = vec![
        row(0, "a", Some("Paris")),
        row(1, "a", Some("Lyon")),
        row(2, "a", Some("PARIS")),
        row(3, "a", Some("paris")),
    ];
    let summaries = summarize_segments(&rows);
    assert_eq!(
        summaries[0].breakdown,
        vec![("Paris".to_string(), 3), ("Lyon".to_string(), 1)]
    );
}

#[test]
fn test_segments_csv_layout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("segments.csv");
    let rows = vec![
        row(0, "placemark_0", Some("Paris")),
        row(1, "placemark_0", Some("Lyon")),
        row(2, "placemark_0", Some("Paris")),
        row(3, "Empty", None),
    ];
    let summaries = summarize_segments(&rows);

    assert_eq!(write_segments_csv(&path, &summaries, false).expect("written"), 2);
    assert_eq!(
        read(&path),
        "placemark,first_city,last_city,cities,city_count\n\
         placemark_0,Paris,Paris,Paris|Lyon|Paris,3\n\
         Empty,,,,0\n"
    );

    write_segments_csv(&path, &summaries, true).expect("written");
    assert_eq!(
        read(&path),
        "placemark,first_city,last_city,cities,city_count,city_breakdown\n\
         placemark_0,Paris,Paris,Paris|Lyon|Paris,3,Paris: 2|Lyon: 1\n\
         Empty,,,,0,\n"
    );
}
