//! Offline nearest-place lookup.
//!
//! The gazetteer is a CSV of populated places (`lat,lon,name,admin1,admin2,cc`,
//! the layout of the GeoNames `cities1000` extract). Places are indexed in an
//! R-tree on unit-sphere coordinates, so the nearest neighbour by chord length
//! is also the nearest by great-circle distance, including across the
//! antimeridian.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use serde::Deserialize;

use crate::error_handling::{GazetteerError, LookupError, LookupStats};
use crate::kml::is_valid;
use crate::models::GeocodeResult;

/// One row of the gazetteer CSV.
#[derive(Debug, Deserialize)]
struct GazetteerRecord {
    lat: f64,
    lon: f64,
    name: String,
    #[serde(default)]
    admin1: Option<String>,
    #[serde(default)]
    cc: Option<String>,
}

/// A populated place.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub admin1: Option<String>,
    pub country_code: Option<String>,
}

impl Place {
    pub fn new(
        latitude: f64,
        longitude: f64,
        name: impl Into<String>,
        admin1: Option<&str>,
        country_code: Option<&str>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            admin1: admin1.map(str::to_string),
            country_code: country_code.map(str::to_string),
        }
    }

    fn to_result(&self) -> GeocodeResult {
        GeocodeResult::new(
            Some(&self.name),
            self.admin1.as_deref(),
            self.country_code.as_deref(),
        )
    }
}

/// A place index entry on the unit sphere.
#[derive(Debug, Clone, Copy)]
struct IndexedPlace {
    idx: usize,
    xyz: [f64; 3],
}

impl RTreeObject for IndexedPlace {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.xyz)
    }
}

impl PointDistance for IndexedPlace {
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.xyz[0] - point[0];
        let dy = self.xyz[1] - point[1];
        let dz = self.xyz[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

fn unit_sphere(lat: f64, lon: f64) -> [f64; 3] {
    let (lat, lon) = (lat.to_radians(), lon.to_radians());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

/// In-memory gazetteer with a spatial index.
pub struct Gazetteer {
    places: Vec<Place>,
    tree: RTree<IndexedPlace>,
}

impl Gazetteer {
    /// Builds the index from a list of places. Places with out-of-range
    /// coordinates are skipped.
    pub fn from_places(places: Vec<Place>) -> Self {
        let places: Vec<Place> = places
            .into_iter()
            .filter(|p| is_valid(p.latitude, p.longitude))
            .collect();
        let indexed = places
            .iter()
            .enumerate()
            .map(|(idx, p)| IndexedPlace {
                idx,
                xyz: unit_sphere(p.latitude, p.longitude),
            })
            .collect();
        Self {
            places,
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Loads a gazetteer CSV.
    ///
    /// Rows that fail to deserialize are skipped and counted in a debug line.
    ///
    /// # Errors
    ///
    /// `GazetteerError::Csv` if the file cannot be opened or its header is
    /// unreadable, `GazetteerError::Empty` if no usable row remains.
    pub fn load(path: &Path) -> Result<Self, GazetteerError> {
        let csv_error = |source: csv::Error| GazetteerError::Csv {
            path: path.to_path_buf(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(csv_error)?;
        reader.headers().map_err(csv_error)?;

        let mut places = Vec::new();
        let mut skipped = 0usize;
        for record in reader.deserialize::<GazetteerRecord>() {
            match record {
                Ok(r) => places.push(Place {
                    latitude: r.lat,
                    longitude: r.lon,
                    name: r.name,
                    admin1: r.admin1,
                    country_code: r.cc,
                }),
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!("Skipped {} unreadable gazetteer rows in {}", skipped, path.display());
        }

        let gazetteer = Self::from_places(places);
        if gazetteer.is_empty() {
            return Err(GazetteerError::Empty(path.to_path_buf()));
        }
        Ok(gazetteer)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// The place nearest to a coordinate.
    pub fn nearest(&self, lat: f64, lon: f64) -> Option<&Place> {
        self.tree
            .nearest_neighbor(&unit_sphere(lat, lon))
            .map(|entry| &self.places[entry.idx])
    }
}

/// Reverse geocoder backed by a local gazetteer.
///
/// If the dataset could not be loaded, every lookup returns all fields absent
/// and is counted as `DatasetUnavailable`; the warning is logged once, at load.
pub struct OfflineGeocoder {
    gazetteer: Option<Gazetteer>,
    stats: Arc<LookupStats>,
}

impl OfflineGeocoder {
    pub fn new(gazetteer: Option<Gazetteer>, stats: Arc<LookupStats>) -> Self {
        Self { gazetteer, stats }
    }

    /// Loads the gazetteer at `path`, degrading to an unavailable dataset on
    /// failure.
    pub fn load(path: &Path, stats: Arc<LookupStats>) -> Self {
        let gazetteer = match Gazetteer::load(path) {
            Ok(g) => {
                info!("Loaded {} places from {}", g.len(), path.display());
                Some(g)
            }
            Err(e) => {
                warn!("Offline gazetteer unavailable, place fields will be empty: {e}");
                None
            }
        };
        Self::new(gazetteer, stats)
    }

    pub fn lookup(&self, lat: f64, lon: f64) -> GeocodeResult {
        let Some(gazetteer) = &self.gazetteer else {
            self.stats.increment_failure(LookupError::DatasetUnavailable);
            return GeocodeResult::empty();
        };
        match gazetteer.nearest(lat, lon) {
            Some(place) => {
                let result = place.to_result();
                if result.is_empty() {
                    self.stats.increment_failure(LookupError::NoAddress);
                } else {
                    self.stats.increment_resolved();
                }
                result
            }
            None => {
                self.stats.increment_failure(LookupError::NoAddress);
                GeocodeResult::empty()
            }
        }
    }
}
