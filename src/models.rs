//! Core data carried through the pipeline.

/// A vertex extracted from the KML document.
///
/// Coordinates are validated on extraction; `segment` is the label of the
/// Placemark the vertex came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
    pub segment: String,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64, segment: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            segment: segment.into(),
        }
    }
}

/// Place fields resolved for a coordinate.
///
/// Any field may be absent; a lookup that fails returns all fields absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeResult {
    pub city: Option<String>,
    pub admin: Option<String>,
    pub country: Option<String>,
}

impl GeocodeResult {
    /// Builds a result, treating empty or blank strings as absent.
    pub fn new(city: Option<&str>, admin: Option<&str>, country: Option<&str>) -> Self {
        Self {
            city: non_blank(city),
            admin: non_blank(admin),
            country: non_blank(country),
        }
    }

    /// Result with every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.admin.is_none() && self.country.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

/// A retained point with its sequence number and place fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub seq: usize,
    pub segment: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place: GeocodeResult,
}

impl Row {
    /// The city name if present and non-blank.
    pub fn city(&self) -> Option<&str> {
        self.place
            .city
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }
}
