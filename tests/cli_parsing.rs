//! Tests for command-line parsing.

use clap::Parser;
use kml_cities::config::{DEFAULT_LANGUAGE, DEFAULT_OUTPUT, DEFAULT_USER_AGENT};
use kml_cities::{Config, DedupOn, GeocodeMode, LogFormat};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_minimal_invocation_uses_defaults() {
    let config = Config::try_parse_from(["kml_cities", "--input-kml", "route.kml"])
        .expect("Should parse with only --input-kml");

    assert_eq!(config.input_kml, PathBuf::from("route.kml"));
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!(config.mode, GeocodeMode::Offline);
    assert_eq!(config.rate, 1.0);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.city_language, DEFAULT_LANGUAGE);
    assert_eq!(config.sample_every, 1);
    assert!(!config.unique_only);
    assert_eq!(config.unique_on, DedupOn::City);
    assert_eq!(config.max_per_placemark, None);
    assert_eq!(config.cities_output, None);
    assert!(!config.cities_global_unique);
    assert_eq!(config.segments_output, None);
    assert!(!config.segment_stats);
    assert!(matches!(config.log_format, LogFormat::Plain));
}

#[test]
fn test_input_kml_is_required() {
    assert!(Config::try_parse_from(["kml_cities"]).is_err());
}

#[test]
fn test_full_invocation() {
    let config = Config::try_parse_from([
        "kml_cities",
        "--input-kml",
        "trip.kml",
        "--output",
        "out.csv",
        "--mode",
        "online",
        "--rate",
        "2.5",
        "--user-agent",
        "my-app",
        "--city-language",
        "fr",
        "--sample-every",
        "10",
        "--unique-only",
        "--unique-on",
        "city_admin_country",
        "--max-per-placemark",
        "50",
        "--cities-output",
        "cities.csv",
        "--cities-global-unique",
        "--segments-output",
        "segments.csv",
        "--segment-stats",
        "--log-format",
        "json",
    ])
    .expect("Should parse every flag");

    assert_eq!(config.mode, GeocodeMode::Online);
    assert_eq!(config.rate_interval(), Duration::from_millis(2500));
    assert_eq!(config.user_agent, "my-app");
    assert_eq!(config.city_language, "fr");
    assert_eq!(config.sample_stride(), 10);
    assert!(config.unique_only);
    assert_eq!(config.unique_on, DedupOn::CityAdminCountry);
    assert_eq!(config.max_per_placemark, Some(50));
    assert_eq!(config.cities_output, Some(PathBuf::from("cities.csv")));
    assert!(config.cities_global_unique);
    assert_eq!(config.segments_output, Some(PathBuf::from("segments.csv")));
    assert!(config.segment_stats);
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_mode_rejected() {
    let result = Config::try_parse_from(["kml_cities", "--input-kml", "a.kml", "--mode", "cloud"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_unique_on_rejected() {
    let result =
        Config::try_parse_from(["kml_cities", "--input-kml", "a.kml", "--unique-on", "country"]);
    assert!(result.is_err());
}

#[test]
fn test_non_numeric_stride_rejected() {
    let result =
        Config::try_parse_from(["kml_cities", "--input-kml", "a.kml", "--sample-every", "ten"]);
    assert!(result.is_err());
}

#[test]
fn test_zero_stride_treated_as_one() {
    let config =
        Config::try_parse_from(["kml_cities", "--input-kml", "a.kml", "--sample-every", "0"])
            .expect("Zero is accepted");
    assert_eq!(config.sample_stride(), 1);
}

#[test]
fn test_negative_counts_rejected() {
    for flag in ["--sample-every", "--max-per-placemark"] {
        let result = Config::try_parse_from(["kml_cities", "--input-kml", "a.kml", flag, "-1"]);
        assert!(result.is_err(), "{flag} -1 should be rejected");
    }
}
