//! Reverse geocoding.
//!
//! Two interchangeable strategies sit behind [`ReverseGeocoder`]:
//! - [`OfflineGeocoder`]: nearest place in a local gazetteer
//! - [`OnlineGeocoder`]: a Nominatim-compatible HTTP service
//!
//! Lookups are best effort. Any failure yields a result with every field
//! absent and is counted in the shared [`LookupStats`].

mod address;
mod offline;
mod online;

use std::sync::Arc;

use log::{info, warn};

use crate::config::{Config, GeocodeMode};
use crate::error_handling::LookupStats;
use crate::models::GeocodeResult;

pub use address::place_from_response;
pub use offline::{Gazetteer, OfflineGeocoder, Place};
pub use online::{OnlineGeocoder, OnlineSettings};

/// Maps a coordinate to place fields.
///
/// Implementations must not fail: problems are reported through an empty
/// [`GeocodeResult`].
#[allow(async_fn_in_trait)]
pub trait ReverseGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeResult;
}

impl ReverseGeocoder for OfflineGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeResult {
        self.lookup(latitude, longitude)
    }
}

impl ReverseGeocoder for OnlineGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeResult {
        self.lookup(latitude, longitude).await
    }
}

/// The geocoder selected for a run.
pub enum Geocoder {
    Offline(OfflineGeocoder),
    Online(OnlineGeocoder),
}

impl Geocoder {
    /// The strategy actually in use, which may differ from the requested one
    /// after a fallback.
    pub fn mode(&self) -> GeocodeMode {
        match self {
            Geocoder::Offline(_) => GeocodeMode::Offline,
            Geocoder::Online(_) => GeocodeMode::Online,
        }
    }
}

impl ReverseGeocoder for Geocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> GeocodeResult {
        match self {
            Geocoder::Offline(g) => g.lookup(latitude, longitude),
            Geocoder::Online(g) => g.lookup(latitude, longitude).await,
        }
    }
}

/// Selects and initializes the geocoder for `config.mode`.
///
/// If the online geocoder cannot be set up, a warning is logged and the
/// offline strategy is used for the whole run.
pub fn init_geocoder(config: &Config, stats: Arc<LookupStats>) -> Geocoder {
    match config.mode {
        GeocodeMode::Offline => Geocoder::Offline(OfflineGeocoder::load(&config.gazetteer, stats)),
        GeocodeMode::Online => {
            match OnlineGeocoder::new(OnlineSettings::from_config(config), Arc::clone(&stats)) {
                Ok(geocoder) => {
                    info!(
                        "Online geocoding via {} (min interval {:?})",
                        geocoder.endpoint(),
                        config.rate_interval()
                    );
                    Geocoder::Online(geocoder)
                }
                Err(e) => {
                    warn!("Online geocoder unavailable ({e}); falling back to offline nearest-city lookup");
                    Geocoder::Offline(OfflineGeocoder::load(&config.gazetteer, stats))
                }
            }
        }
    }
}
