//! Online reverse geocoding against a Nominatim-compatible service.
//!
//! One `GET <base>/reverse` per lookup, spaced by the configured minimum
//! interval. Transient failures (transport errors, timeouts, 429, 5xx) are
//! retried on a fixed interval; anything else fails the lookup immediately.
//! A failed lookup never fails the run: the point keeps empty place fields.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde_json::Value;
use tokio_retry::RetryIf;
use url::Url;

use super::address::place_from_response;
use crate::config::{Config, GEOCODE_REQUEST_TIMEOUT, GEOCODE_RETRY_WAIT_MS};
use crate::error_handling::{
    categorize_reqwest_error, categorize_status, get_retry_strategy, InitializationError,
    LookupError, LookupStats,
};
use crate::initialization::{init_client, init_rate_limiter, RateLimiter};
use crate::models::GeocodeResult;

/// Settings for the online geocoder.
#[derive(Debug, Clone)]
pub struct OnlineSettings {
    /// Service base URL; `/reverse` is appended
    pub base_url: String,
    pub user_agent: String,
    /// Value of the `accept-language` parameter
    pub language: String,
    /// Minimum delay between requests (zero disables)
    pub min_interval: Duration,
    /// Wait between retries of a transient failure
    pub retry_wait: Duration,
    /// Per-request timeout
    pub timeout: Duration,
}

impl OnlineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.nominatim_url.clone(),
            user_agent: config.user_agent.clone(),
            language: config.city_language.clone(),
            min_interval: config.rate_interval(),
            retry_wait: Duration::from_millis(GEOCODE_RETRY_WAIT_MS),
            timeout: GEOCODE_REQUEST_TIMEOUT,
        }
    }
}

/// Builds the `reverse` endpoint under a service base URL.
fn reverse_endpoint(base_url: &str) -> Result<Url, InitializationError> {
    let mut url = Url::parse(base_url).map_err(|source| InitializationError::ServiceUrlError {
        url: base_url.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(InitializationError::UnsupportedScheme(base_url.to_string()));
    }
    url.path_segments_mut()
        .map_err(|_| InitializationError::UnsupportedScheme(base_url.to_string()))?
        .pop_if_empty()
        .push("reverse");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Reverse geocoder backed by a Nominatim-compatible HTTP service.
pub struct OnlineGeocoder {
    client: reqwest::Client,
    endpoint: Url,
    language: String,
    limiter: Option<RateLimiter>,
    retry_wait: Duration,
    stats: Arc<LookupStats>,
}

impl OnlineGeocoder {
    /// Creates the geocoder.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the base URL is not a usable
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(settings: OnlineSettings, stats: Arc<LookupStats>) -> Result<Self, InitializationError> {
        let endpoint = reverse_endpoint(&settings.base_url)?;
        let client = init_client(&settings.user_agent, settings.timeout)?;
        Ok(Self {
            client,
            endpoint,
            language: settings.language,
            limiter: init_rate_limiter(settings.min_interval),
            retry_wait: settings.retry_wait,
            stats,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn lookup(&self, latitude: f64, longitude: f64) -> GeocodeResult {
        let attempts = AtomicUsize::new(0);
        let outcome = RetryIf::spawn(
            get_retry_strategy(self.retry_wait),
            || {
                attempts.fetch_add(1, Ordering::Relaxed);
                self.fetch(latitude, longitude)
            },
            |e: &LookupError| e.is_transient(),
        )
        .await;

        let retries = attempts.load(Ordering::Relaxed).saturating_sub(1);
        if retries > 0 {
            self.stats.add_retries(retries);
        }

        match outcome.and_then(|body| place_from_response(&body)) {
            Ok(result) if !result.is_empty() => {
                self.stats.increment_resolved();
                result
            }
            Ok(result) => {
                self.stats.increment_failure(LookupError::NoAddress);
                result
            }
            Err(e) => {
                debug!("Reverse lookup failed for ({latitude}, {longitude}): {e}");
                self.stats.increment_failure(e);
                GeocodeResult::empty()
            }
        }
    }

    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Value, LookupError> {
        if let Some(limiter) = &self.limiter {
            limiter.acquire().await;
        }

        let params = [
            ("format", "jsonv2".to_string()),
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("addressdetails", "1".to_string()),
            ("accept-language", self.language.clone()),
        ];
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Reverse lookup returned HTTP {}", status.as_u16());
            return Err(categorize_status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| categorize_reqwest_error(&e))
    }
}
