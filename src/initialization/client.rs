//! HTTP client initialization.
//!
//! The online geocoder is the only HTTP consumer; it gets a single client with
//! a per-request timeout and an identifying User-Agent.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for reverse geocoding.
///
/// # Arguments
///
/// * `user_agent` - Value sent as the `User-Agent` header
/// * `timeout` - Per-request timeout
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built
/// (for example when the User-Agent is not a valid header value).
pub fn init_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(timeout)
        .user_agent(user_agent.to_string())
        .build()?;
    Ok(client)
}
