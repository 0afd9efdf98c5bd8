//! Lookup statistics tracking.
//!
//! Counts successful lookups and best-effort lookup failures by category so the
//! run can report how many rows ended up with empty place fields and why.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupError;

/// Lookup statistics tracker.
///
/// All categories are initialized to zero on creation. Counters are atomic so
/// a single tracker can be shared (via `Arc`) between the online geocoder and
/// its offline fallback.
pub struct LookupStats {
    failures: HashMap<LookupError, AtomicUsize>,
    resolved: AtomicUsize,
    retries: AtomicUsize,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in LookupError::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }

        LookupStats {
            failures,
            resolved: AtomicUsize::new(0),
            retries: AtomicUsize::new(0),
        }
    }

    /// Increment a failure counter.
    pub fn increment_failure(&self, failure: LookupError) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in LookupStats initialization.",
                failure
            );
        }
    }

    /// Record a lookup that produced at least one place field.
    pub fn increment_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Record retries issued for one online lookup.
    pub fn add_retries(&self, count: usize) {
        self.retries.fetch_add(count, Ordering::Relaxed);
    }

    /// Get the count for a failure category.
    pub fn get_failure_count(&self, failure: LookupError) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Lookups that produced at least one place field.
    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::SeqCst)
    }

    /// Retries issued by the online geocoder.
    pub fn retries(&self) -> usize {
        self.retries.load(Ordering::SeqCst)
    }

    /// Get total failure count across all categories.
    pub fn total_failures(&self) -> usize {
        LookupError::iter().map(|e| self.get_failure_count(e)).sum()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
