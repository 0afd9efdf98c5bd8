//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_GAZETTEER, DEFAULT_LANGUAGE, DEFAULT_NOMINATIM_URL, DEFAULT_OUTPUT,
    DEFAULT_RATE_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which reverse geocoder to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GeocodeMode {
    /// Nearest place in a local gazetteer (no network)
    Offline,
    /// Nominatim-compatible reverse geocoding service
    Online,
}

/// Key used by the consecutive-duplicate filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DedupOn {
    /// Compare the city name only
    #[value(name = "city")]
    City,
    /// Compare city, admin region and country together
    #[value(name = "city_admin_country")]
    CityAdminCountry,
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// through `Default` when the crate is used as a library.
///
/// # Examples
///
/// ```bash
/// # Offline, every vertex, skip consecutive repeats of the same city
/// kml_cities --input-kml route.kml --unique-only
///
/// # Online with a custom client id, sampling every 10th vertex
/// kml_cities --input-kml route.kml --mode online --user-agent my-app --sample-every 10
///
/// # All three reports
/// kml_cities --input-kml route.kml --cities-output cities.csv \
///     --segments-output segments.csv --segment-stats
/// ```
///
/// ```no_run
/// use kml_cities::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_kml: PathBuf::from("route.kml"),
///     unique_only: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "kml_cities",
    about = "Extract all cities from a KML, in traversal order."
)]
pub struct Config {
    /// Path to KML file
    #[arg(long, value_parser)]
    pub input_kml: PathBuf,

    /// Output CSV path
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Geocoding mode: offline|online
    #[arg(long, value_enum, default_value_t = GeocodeMode::Offline)]
    pub mode: GeocodeMode,

    /// Minimum seconds between online geocoding calls
    #[arg(long, default_value_t = DEFAULT_RATE_SECS)]
    pub rate: f64,

    /// User-Agent for online geocoding
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Language for online results
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub city_language: String,

    /// Base URL of the Nominatim-compatible service (online mode)
    #[arg(long, env = "KML_CITIES_NOMINATIM_URL", default_value = DEFAULT_NOMINATIM_URL)]
    pub nominatim_url: String,

    /// Offline gazetteer CSV (columns: lat,lon,name,admin1,admin2,cc)
    #[arg(long, value_parser, env = "KML_CITIES_GAZETTEER", default_value = DEFAULT_GAZETTEER)]
    pub gazetteer: PathBuf,

    /// Use every Nth point (default 1 = all points)
    #[arg(long, default_value_t = 1)]
    pub sample_every: usize,

    /// Skip consecutive duplicates (later repeats are kept)
    #[arg(long)]
    pub unique_only: bool,

    /// Duplicate key for --unique-only
    #[arg(long, value_enum, default_value_t = DedupOn::City)]
    pub unique_on: DedupOn,

    /// Cap retained points per Placemark
    #[arg(long)]
    pub max_per_placemark: Option<usize>,

    /// Write a city-only sequence to this CSV
    #[arg(long, value_parser)]
    pub cities_output: Option<PathBuf>,

    /// City-only report keeps the first occurrence of each city only
    /// (default collapses consecutive repeats)
    #[arg(long)]
    pub cities_global_unique: bool,

    /// Write a per-Placemark summary to this CSV
    #[arg(long, value_parser)]
    pub segments_output: Option<PathBuf>,

    /// Add a per-city count breakdown to the summary
    #[arg(long)]
    pub segment_stats: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Sampling stride, never below one.
    pub fn sample_stride(&self) -> usize {
        self.sample_every.max(1)
    }

    /// Minimum interval between online calls.
    ///
    /// Negative, non-finite, or unrepresentably large values disable the delay.
    pub fn rate_interval(&self) -> Duration {
        if self.rate.is_finite() && self.rate > 0.0 {
            Duration::try_from_secs_f64(self.rate).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_kml: PathBuf::from("route.kml"),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: GeocodeMode::Offline,
            rate: DEFAULT_RATE_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            city_language: DEFAULT_LANGUAGE.to_string(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            gazetteer: PathBuf::from(DEFAULT_GAZETTEER),
            sample_every: 1,
            unique_only: false,
            unique_on: DedupOn::City,
            max_per_placemark: None,
            cities_output: None,
            cities_global_unique: false,
            segments_output: None,
            segment_stats: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
