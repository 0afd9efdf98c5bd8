//! Configuration constants.
//!
//! This module defines the defaults and operational limits used throughout the
//! application: geocoding service settings, retry policy, logging cadence and
//! process exit codes.

use std::time::Duration;

/// Default path of the primary CSV report.
pub const DEFAULT_OUTPUT: &str = "cities_in_order.csv";

/// Default offline gazetteer (GeoNames `cities1000` extract in CSV form).
pub const DEFAULT_GAZETTEER: &str = "rg_cities1000.csv";

/// Default Nominatim instance used by the online geocoder.
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent for the online geocoder.
///
/// Nominatim's usage policy requires an identifying User-Agent; override it
/// with `--user-agent` for anything beyond casual use.
pub const DEFAULT_USER_AGENT: &str = "kml_cities_extractor";

/// Default language for online results.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default minimum delay between online geocoding calls, in seconds.
pub const DEFAULT_RATE_SECS: f64 = 1.0;

// Network operation timeouts
/// Per-request timeout for the online geocoder
pub const GEOCODE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Retry strategy
/// Number of retries after the initial attempt for transient failures
pub const GEOCODE_MAX_RETRIES: usize = 2;
/// Fixed wait between retries in milliseconds
pub const GEOCODE_RETRY_WAIT_MS: u64 = 2000;

/// HTTP status code for Too Many Requests
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Log a progress line every this many processed points
pub const LOGGING_INTERVAL: usize = 500;

// Exit codes
/// Exit status for any fatal error other than an empty extraction
pub const EXIT_FAILURE: i32 = 1;
/// Exit status when the input document contains no usable vertices
pub const EXIT_NO_POINTS: i32 = 2;

/// Prefix for synthetic labels of unnamed placemarks.
pub const SYNTHETIC_LABEL_PREFIX: &str = "placemark_";

/// Separator used for joined city lists in the segment summary.
pub const CITY_LIST_SEPARATOR: &str = "|";
