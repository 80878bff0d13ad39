//! Rate derivation for cumulative OS counters.
//!
//! Network and disk I/O are exposed by the OS as monotonically increasing
//! byte counters. The dashboard displays instantaneous rates, so each tracked
//! counter keeps its previous reading and divides the delta by the elapsed
//! wall-clock time.

use std::time::Instant;

/// Computes a rate in units/second from two cumulative counter readings.
///
/// Returns `0.0` when the elapsed time is zero or negative. A negative delta
/// (counter reset or wraparound) is passed through un-clamped, producing a
/// negative momentary rate.
pub fn rate(prev_value: u64, curr_value: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    (curr_value as f64 - prev_value as f64) / elapsed_secs
}

/// Tracks the previous reading of one cumulative counter.
///
/// The first call to [`CounterTracker::update`] has no baseline and returns
/// `0.0`; each call replaces the stored reading with the current one.
#[derive(Debug, Default)]
pub struct CounterTracker {
    last: Option<(u64, Instant)>,
}

impl CounterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new counter reading and returns the rate since the previous
    /// one, in units/second.
    pub fn update(&mut self, value: u64, now: Instant) -> f64 {
        let result = match self.last {
            Some((prev_value, prev_time)) => {
                let elapsed = now.duration_since(prev_time).as_secs_f64();
                rate(prev_value, value, elapsed)
            }
            None => 0.0,
        };
        self.last = Some((value, now));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rate_basic() {
        assert_eq!(rate(100, 150, 2.0), 25.0);
    }

    #[test]
    fn test_rate_zero_elapsed() {
        assert_eq!(rate(100, 500, 0.0), 0.0);
        assert_eq!(rate(500, 100, -1.0), 0.0);
    }

    #[test]
    fn test_rate_negative_delta_passes_through() {
        // Counter reset: the momentary rate is negative, not clamped.
        assert_eq!(rate(1000, 0, 2.0), -500.0);
    }

    #[test]
    fn test_tracker_first_reading_is_zero() {
        let mut tracker = CounterTracker::new();
        assert_eq!(tracker.update(12345, Instant::now()), 0.0);
    }

    #[test]
    fn test_tracker_replaces_previous_reading() {
        let mut tracker = CounterTracker::new();
        let t0 = Instant::now();
        tracker.update(100, t0);
        let r1 = tracker.update(300, t0 + Duration::from_secs(2));
        assert_eq!(r1, 100.0);
        let r2 = tracker.update(300, t0 + Duration::from_secs(4));
        assert_eq!(r2, 0.0);
    }

    #[test]
    fn test_tracker_same_instant_is_zero() {
        let mut tracker = CounterTracker::new();
        let t0 = Instant::now();
        tracker.update(100, t0);
        assert_eq!(tracker.update(999, t0), 0.0);
    }
}
