//! Bounded time-series history and OHLC candle aggregation.
//!
//! Each trend metric (CPU %, memory %) keeps a rolling window of raw per-poll
//! samples for the line charts, plus an OHLC candle series built from groups
//! of consecutive samples for the candlestick chart. All accumulation state
//! is owned by one [`TrendHistory`] constructed at startup and handed to
//! renderers by reference.

use crate::config::{DashboardConfig, PanelSet};
use crate::model::Snapshot;

/// Fixed-capacity rolling buffer of scalar samples, oldest first.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    values: Vec<f64>,
    capacity: usize,
}

impl TimeSeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest one when full.
    pub fn push(&mut self, value: f64) {
        if self.values.len() >= self.capacity {
            self.values.remove(0);
        }
        self.values.push(value);
    }

    /// Read-only view of the samples, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Open/high/low/close summary of a fixed-size group of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Builds a candle from a non-empty bucket of samples in arrival order.
    pub fn from_bucket(bucket: &[f64]) -> Option<Self> {
        let (first, last) = (bucket.first()?, bucket.last()?);
        Some(Self {
            open: *first,
            high: bucket.iter().copied().fold(f64::MIN, f64::max),
            low: bucket.iter().copied().fold(f64::MAX, f64::min),
            close: *last,
        })
    }

    /// A candle is bullish when it closed at or above its open.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Bounded candle buffer plus the pending bucket of not-yet-grouped samples.
///
/// Candles cover a fixed number of samples, not a fixed wall-clock window:
/// jittery poll intervals stretch the window duration but never split or
/// merge buckets.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    candles: Vec<Candle>,
    bucket: Vec<f64>,
    interval: usize,
    capacity: usize,
}

impl CandleSeries {
    pub fn new(interval: usize, capacity: usize) -> Self {
        Self {
            candles: Vec::with_capacity(capacity),
            bucket: Vec::with_capacity(interval),
            interval: interval.max(1),
            capacity,
        }
    }

    /// Adds a sample to the pending bucket, emitting a candle once the bucket
    /// reaches the configured interval. The bucket is cleared on emit; a
    /// partial bucket is retained across polls.
    pub fn push(&mut self, value: f64) {
        self.bucket.push(value);
        if self.bucket.len() >= self.interval {
            if let Some(candle) = Candle::from_bucket(&self.bucket) {
                if self.candles.len() >= self.capacity {
                    self.candles.remove(0);
                }
                self.candles.push(candle);
            }
            self.bucket.clear();
        }
    }

    /// Completed candles, oldest first.
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Number of samples waiting in the pending bucket.
    pub fn pending_len(&self) -> usize {
        self.bucket.len()
    }
}

/// History for one trend metric: line chart samples plus candle aggregates.
#[derive(Debug, Clone)]
pub struct TrendTrack {
    pub series: TimeSeries,
    pub candles: CandleSeries,
}

impl TrendTrack {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            series: TimeSeries::new(config.history_capacity),
            candles: CandleSeries::new(config.candle_interval, config.candle_capacity),
        }
    }

    pub fn push(&mut self, value: f64) {
        self.series.push(value);
        self.candles.push(value);
    }
}

/// All trend history for the dashboard, one track per trend metric.
#[derive(Debug, Clone)]
pub struct TrendHistory {
    pub cpu: TrendTrack,
    pub memory: TrendTrack,
}

impl TrendHistory {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            cpu: TrendTrack::new(config),
            memory: TrendTrack::new(config),
        }
    }

    /// Folds one snapshot into the history, honoring the enabled panel set.
    pub fn record(&mut self, snapshot: &Snapshot, panels: &PanelSet) {
        if panels.cpu {
            self.cpu.push(snapshot.cpu.total);
        }
        if panels.memory {
            self.memory.push(snapshot.memory.percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_series_keeps_last_capacity_values() {
        let mut series = TimeSeries::new(3);
        for v in 0..10 {
            series.push(v as f64);
        }
        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_time_series_under_capacity() {
        let mut series = TimeSeries::new(60);
        series.push(1.0);
        series.push(2.0);
        assert_eq!(series.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_candle_from_bucket() {
        let candle = Candle::from_bucket(&[10.0, 40.0, 25.0, 5.0, 30.0]).unwrap();
        assert_eq!(candle.open, 10.0);
        assert_eq!(candle.high, 40.0);
        assert_eq!(candle.low, 5.0);
        assert_eq!(candle.close, 30.0);
        assert!(candle.is_bullish());
    }

    #[test]
    fn test_candle_invariants_hold() {
        let candle = Candle::from_bucket(&[33.0, 12.0, 48.0]).unwrap();
        assert!(candle.low <= candle.open && candle.open <= candle.high);
        assert!(candle.low <= candle.close && candle.close <= candle.high);
        assert!(!candle.is_bullish());
    }

    #[test]
    fn test_candle_emission_count_and_pending() {
        let mut series = CandleSeries::new(5, 20);
        for k in 1..=13 {
            series.push(k as f64);
        }
        // 13 pushes with interval 5: two candles, three pending.
        assert_eq!(series.candles().len(), 2);
        assert_eq!(series.pending_len(), 3);
        assert_eq!(series.candles()[0].open, 1.0);
        assert_eq!(series.candles()[0].close, 5.0);
        assert_eq!(series.candles()[1].open, 6.0);
    }

    #[test]
    fn test_candle_series_eviction() {
        let mut series = CandleSeries::new(1, 2);
        series.push(1.0);
        series.push(2.0);
        series.push(3.0);
        assert_eq!(series.candles().len(), 2);
        assert_eq!(series.candles()[0].open, 2.0);
        assert_eq!(series.candles()[1].open, 3.0);
    }

    #[test]
    fn test_history_respects_panel_set() {
        let config = DashboardConfig::default();
        let mut history = TrendHistory::new(&config);
        let panels = PanelSet {
            memory: false,
            ..PanelSet::default()
        };

        let mut snapshot = Snapshot::default();
        snapshot.cpu.total = 42.0;
        snapshot.memory.percent = 80.0;
        history.record(&snapshot, &panels);

        assert_eq!(history.cpu.series.values(), &[42.0]);
        assert!(history.memory.series.is_empty());
    }
}
