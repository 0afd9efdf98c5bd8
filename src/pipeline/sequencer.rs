//! Per-point filtering and sequence numbering.
//!
//! Filters run in a fixed order for every point: sampling stride, per-segment
//! cap, geocode, consecutive-duplicate suppression. Only points that survive
//! the first two are geocoded. Sequence numbers are assigned after all
//! filtering, so retained rows are numbered 0, 1, 2, ... without gaps.

use std::collections::HashMap;

use log::debug;

use super::dedup::DedupKey;
use crate::config::{Config, DedupOn};
use crate::geocode::ReverseGeocoder;
use crate::models::{Point, Row};

/// Filter settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerOptions {
    /// Keep every Nth point; 0 is treated as 1
    pub sample_every: usize,
    /// Maximum retained rows per segment
    pub max_per_segment: Option<usize>,
    /// Consecutive-duplicate suppression key, if enabled
    pub dedup: Option<DedupOn>,
}

impl SequencerOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            sample_every: config.sample_stride(),
            max_per_segment: config.max_per_placemark,
            dedup: config.unique_only.then_some(config.unique_on),
        }
    }

    fn stride(&self) -> usize {
        self.sample_every.max(1)
    }
}

impl Default for SequencerOptions {
    fn default() -> Self {
        Self {
            sample_every: 1,
            max_per_segment: None,
            dedup: None,
        }
    }
}

/// Running state carried from one point to the next.
#[derive(Debug, Default)]
pub struct SequencerState {
    /// Retained rows per segment label
    pub per_segment: HashMap<String, usize>,
    /// Dedup key of the last retained row
    pub last_key: Option<DedupKey>,
    pub next_seq: usize,
}

impl SequencerState {
    fn retained_in(&self, segment: &str) -> usize {
        self.per_segment.get(segment).copied().unwrap_or(0)
    }
}

/// Counters describing what the filters did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerStats {
    pub points_seen: usize,
    pub sampled_out: usize,
    pub capped: usize,
    pub geocoded: usize,
    pub duplicates: usize,
    pub retained: usize,
}

/// Turns an ordered stream of points into numbered rows.
#[derive(Debug, Default)]
pub struct Sequencer {
    options: SequencerOptions,
    state: SequencerState,
    stats: SequencerStats,
    rows: Vec<Row>,
}

impl Sequencer {
    pub fn new(options: SequencerOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn stats(&self) -> SequencerStats {
        self.stats
    }

    /// Runs one point through the filters.
    ///
    /// `index` is the point's 0-based position in extraction order. Returns
    /// the new row if the point was retained.
    pub async fn push<G: ReverseGeocoder>(
        &mut self,
        index: usize,
        point: Point,
        geocoder: &G,
    ) -> Option<&Row> {
        self.stats.points_seen += 1;

        if index % self.options.stride() != 0 {
            self.stats.sampled_out += 1;
            return None;
        }

        if let Some(cap) = self.options.max_per_segment {
            if self.state.retained_in(&point.segment) >= cap {
                self.stats.capped += 1;
                return None;
            }
        }

        let place = geocoder.reverse(point.latitude, point.longitude).await;
        self.stats.geocoded += 1;
        debug!(
            "#{} ({:.5}, {:.5}) -> {}",
            index,
            point.latitude,
            point.longitude,
            place.city.as_deref().unwrap_or("-")
        );

        if let Some(mode) = self.options.dedup {
            let key = DedupKey::from_result(&place, mode);
            if self.state.last_key.as_ref() == Some(&key) {
                self.stats.duplicates += 1;
                return None;
            }
            self.state.last_key = Some(key);
        }

        *self
            .state
            .per_segment
            .entry(point.segment.clone())
            .or_insert(0) += 1;
        let row = Row {
            seq: self.state.next_seq,
            segment: point.segment,
            latitude: point.latitude,
            longitude: point.longitude,
            place,
        };
        self.state.next_seq += 1;
        self.stats.retained += 1;
        self.rows.push(row);
        self.rows.last()
    }

    /// Consumes the sequencer, returning the retained rows and counters.
    pub fn finish(self) -> (Vec<Row>, SequencerStats) {
        (self.rows, self.stats)
    }
}
