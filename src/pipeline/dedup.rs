//! Keys for consecutive-duplicate suppression.

use crate::config::DedupOn;
use crate::models::GeocodeResult;

/// Normalizes a place field for comparison: trimmed and lowercased, with an
/// absent value treated as the empty string.
pub fn normalize(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Comparison key for two adjacent retained rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    City(String),
    Place {
        city: String,
        admin: String,
        country: String,
    },
}

impl DedupKey {
    pub fn from_result(result: &GeocodeResult, mode: DedupOn) -> Self {
        let city = normalize(result.city.as_deref());
        match mode {
            DedupOn::City => DedupKey::City(city),
            DedupOn::CityAdminCountry => DedupKey::Place {
                city,
                admin: normalize(result.admin.as_deref()),
                country: normalize(result.country.as_deref()),
            },
        }
    }
}
