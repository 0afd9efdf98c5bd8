//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use std::time::Duration;
use tokio_retry::strategy::FixedInterval;

use super::types::LookupError;
use crate::config::{GEOCODE_MAX_RETRIES, HTTP_STATUS_TOO_MANY_REQUESTS};

/// Creates the fixed-interval retry strategy for online lookups.
///
/// Yields `GEOCODE_MAX_RETRIES` delays of `wait` each, so a request is tried
/// at most `GEOCODE_MAX_RETRIES + 1` times.
pub fn get_retry_strategy(wait: Duration) -> impl Iterator<Item = Duration> {
    FixedInterval::new(wait).take(GEOCODE_MAX_RETRIES)
}

/// Categorizes a `reqwest::Error` into a `LookupError`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> LookupError {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_timeout() {
        LookupError::Timeout
    } else if error.is_decode() {
        LookupError::MalformedResponse
    } else {
        // Connect, request, body and builder failures
        LookupError::Transport
    }
}

/// Categorizes a non-success HTTP status code.
pub fn categorize_status(status: u16) -> LookupError {
    match status {
        HTTP_STATUS_TOO_MANY_REQUESTS => LookupError::RateLimited,
        500..=599 => LookupError::ServerError,
        _ => LookupError::HttpStatus,
    }
}
