//! Tests for process exit status and user-facing output of the binary.

mod helpers;

use std::path::Path;
use std::process::{Command, Output};

use helpers::{write_gazetteer, write_kml, PARIS_PARIS_LYON};

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kml_cities"))
        .current_dir(dir)
        .env_remove("KML_CITIES_GAZETTEER")
        .env_remove("KML_CITIES_NOMINATIM_URL")
        .env_remove("RUST_LOG")
        .args(args)
        .args(["--log-level", "error"])
        .output()
        .expect("Failed to run kml_cities binary")
}

#[test]
fn test_no_points_exits_with_two() {
    let dir = tempfile::tempdir().expect("temp dir");
    let kml = write_kml(
        dir.path(),
        "empty.kml",
        "<Placemark><name>Nothing</name></Placemark>",
    );

    let output = run(dir.path(), &["--input-kml", kml.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No points found in KML"));
    assert!(!dir.path().join("cities_in_order.csv").exists());
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run(dir.path(), &["--input-kml", "does_not_exist.kml"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_xml_exits_with_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let kml = dir.path().join("broken.kml");
    std::fs::write(&kml, "<kml><Placemark><name>x</Placemark></kml>").expect("write");

    let output = run(dir.path(), &["--input-kml", kml.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unwritable_output_exits_with_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let kml = write_kml(dir.path(), "route.kml", PARIS_PARIS_LYON);
    let gazetteer = write_gazetteer(dir.path());

    let output = run(
        dir.path(),
        &[
            "--input-kml",
            kml.to_str().expect("utf-8 path"),
            "--gazetteer",
            gazetteer.to_str().expect("utf-8 path"),
            "--output",
            "missing_dir/out.csv",
        ],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_successful_run_reports_written_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let kml = write_kml(dir.path(), "route.kml", PARIS_PARIS_LYON);
    let gazetteer = write_gazetteer(dir.path());

    let output = run(
        dir.path(),
        &[
            "--input-kml",
            kml.to_str().expect("utf-8 path"),
            "--gazetteer",
            gazetteer.to_str().expect("utf-8 path"),
            "--unique-only",
            "--cities-output",
            "cities.csv",
        ],
    );
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrote 2 rows to cities_in_order.csv"), "stdout: {stdout}");
    assert!(stdout.contains("Wrote 2 rows to cities.csv"), "stdout: {stdout}");
    assert!(dir.path().join("cities_in_order.csv").exists());
}

#[test]
fn test_missing_gazetteer_still_succeeds() {
    let dir = tempfile::tempdir().expect("temp dir");
    let kml = write_kml(dir.path(), "route.kml", PARIS_PARIS_LYON);

    let output = run(
        dir.path(),
        &[
            "--input-kml",
            kml.to_str().expect("utf-8 path"),
            "--gazetteer",
            "no_such_gazetteer.csv",
        ],
    );
    assert_eq!(output.status.code(), Some(0));

    let report =
        std::fs::read_to_string(dir.path().join("cities_in_order.csv")).expect("primary report");
    assert_eq!(report.lines().count(), 4);
    assert!(report.lines().skip(1).all(|line| line.ends_with(",,,")));
}
