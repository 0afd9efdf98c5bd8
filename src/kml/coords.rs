//! Coordinate token parsing.
//!
//! KML writes `coordinates` as whitespace-separated `lon,lat[,alt]` tuples and
//! `gx:coord` as a single whitespace-separated `lon lat [alt]` triple. Tokens
//! that do not parse or fall outside the valid range are dropped.

/// Parses a KML `coordinates` value into `(lat, lon)` pairs in order.
pub fn parse_coordinates(text: &str) -> Vec<(f64, f64)> {
    text.split_whitespace()
        .filter_map(|token| {
            let mut parts = token.split(',');
            let lon = parts.next()?;
            let lat = parts.next()?;
            parse_lon_lat(lon, lat)
        })
        .collect()
}

/// Parses a `gx:coord` value into a `(lat, lon)` pair.
pub fn parse_track_coord(text: &str) -> Option<(f64, f64)> {
    let mut parts = text.split_whitespace();
    let lon = parts.next()?;
    let lat = parts.next()?;
    parse_lon_lat(lon, lat)
}

fn parse_lon_lat(lon: &str, lat: &str) -> Option<(f64, f64)> {
    let lon: f64 = lon.trim().parse().ok()?;
    let lat: f64 = lat.trim().parse().ok()?;
    is_valid(lat, lon).then_some((lat, lon))
}

/// Whether a coordinate lies within WGS84 bounds.
///
/// NaN fails every comparison and so is rejected along with infinities.
pub fn is_valid(lat: f64, lon: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)
}
