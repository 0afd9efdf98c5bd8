//! Report types.

/// How the city-only report removes repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CityMode {
    /// Keep only the first occurrence of each city across the run
    GlobalUnique,
    /// Drop a city only when it repeats the previous kept entry
    Consecutive,
}

impl CityMode {
    pub fn from_flag(global_unique: bool) -> Self {
        if global_unique {
            CityMode::GlobalUnique
        } else {
            CityMode::Consecutive
        }
    }
}

/// One entry of the city-only report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityEntry {
    /// Position in the city-only report
    pub order: usize,
    pub city: String,
    /// Sequence number of the primary row this entry came from
    pub seq: usize,
    pub segment: String,
}

/// Per-segment summary of retained rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentSummary {
    pub segment: String,
    /// Non-empty cities in row order, repeats included
    pub cities: Vec<String>,
    /// Distinct cities (case-insensitive) with their counts, by first
    /// occurrence; the label keeps the case of the first occurrence
    pub breakdown: Vec<(String, usize)>,
}

impl SegmentSummary {
    pub fn first_city(&self) -> Option<&str> {
        self.cities.first().map(String::as_str)
    }

    pub fn last_city(&self) -> Option<&str> {
        self.cities.last().map(String::as_str)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}
