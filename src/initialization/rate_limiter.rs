//! Minimum-interval rate limiter.
//!
//! Online lookups are issued one at a time, so a token bucket is unnecessary:
//! each call reserves the next free slot and sleeps until it arrives.

use std::time::Duration;

use log::trace;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Enforces a minimum delay between consecutive acquisitions.
///
/// The first acquisition never waits. Every later one starts no earlier than
/// `interval` after the previous one started.
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// Waits until the next slot is free and reserves it.
    pub async fn acquire(&self) {
        let wait = {
            let mut next_slot = self.next_slot.lock().await;
            let now = Instant::now();
            let start = match *next_slot {
                Some(slot) if slot > now => slot,
                _ => now,
            };
            *next_slot = start.checked_add(self.interval);
            start.saturating_duration_since(now)
        };

        if !wait.is_zero() {
            trace!("Rate limiter sleeping {:?}", wait);
            sleep(wait).await;
        }
    }
}

/// Initializes a rate limiter for the given minimum interval.
///
/// Returns `None` when `interval` is zero, which disables limiting.
pub fn init_rate_limiter(interval: Duration) -> Option<RateLimiter> {
    if interval.is_zero() {
        return None;
    }
    Some(RateLimiter::new(interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_disables_limiter() {
        assert!(init_rate_limiter(Duration::ZERO).is_none());
        assert!(init_rate_limiter(Duration::from_millis(5)).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_acquire_is_immediate() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consecutive_acquires_are_spaced() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_time_counts_toward_interval() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        limiter.acquire().await;
        sleep(Duration::from_secs(3)).await;
        let before = Instant::now();
        limiter.acquire().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
