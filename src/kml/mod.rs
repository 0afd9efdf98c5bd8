//! KML vertex extraction.
//!
//! Turns a KML document into a flat, ordered list of [`Point`]s. Each
//! Placemark is one segment; its vertices come from polylines
//! (`LineString`), markers (`Point`) and timestamped tracks (`gx:Track`), in
//! document order. Invalid coordinate tokens are dropped silently.
//!
//! [`Point`]: crate::models::Point

mod coords;
mod extract;

pub use coords::{is_valid, parse_coordinates, parse_track_coord};
pub use extract::{parse_kml_file, parse_kml_str};
