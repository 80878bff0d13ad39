//! Dashboard state.
//!
//! [`AppState`] is the single owner of all accumulation state: trend history,
//! the latest snapshot, and the last collection error. It is constructed once
//! at startup and borrowed by the renderers, never shared globally.

use std::time::{Duration, Instant};

use crate::collector::CollectError;
use crate::config::DashboardConfig;
use crate::history::TrendHistory;
use crate::model::Snapshot;

pub struct AppState {
    pub config: DashboardConfig,
    pub history: TrendHistory,
    /// Latest successfully collected snapshot.
    pub current: Option<Snapshot>,
    /// Error from the most recent poll, cleared on the next success.
    pub last_error: Option<String>,
    pub paused: bool,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            history: TrendHistory::new(&config),
            config,
            current: None,
            last_error: None,
            paused: false,
            started_at: Instant::now(),
        }
    }

    /// Folds one poll result into the state.
    ///
    /// A failed collection only records the error: history and the last
    /// snapshot stay untouched, so the panels keep showing the most recent
    /// good data and the next cycle proceeds normally.
    pub fn apply(&mut self, result: Result<Snapshot, CollectError>) {
        match result {
            Ok(snapshot) => {
                self.history.record(&snapshot, &self.config.panels);
                self.current = Some(snapshot);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Time since the dashboard started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MetricsProvider;
    use crate::collector::mock::MockProvider;

    #[test]
    fn test_collection_failure_preserves_state() {
        let mut provider = MockProvider::new();
        provider
            .push_sample(10.0, 40.0)
            .push_sample(20.0, 50.0)
            .push_failure("provider down")
            .push_sample(30.0, 60.0);

        let mut state = AppState::new(DashboardConfig::default());

        state.apply(provider.collect());
        state.apply(provider.collect());
        assert_eq!(state.history.cpu.series.values(), &[10.0, 20.0]);

        // Cycle N fails: error recorded, history and snapshot unchanged.
        state.apply(provider.collect());
        assert!(state.last_error.is_some());
        assert_eq!(state.history.cpu.series.values(), &[10.0, 20.0]);
        assert_eq!(state.current.as_ref().map(|s| s.cpu.total), Some(20.0));

        // Cycle N+1 succeeds and clears the error.
        state.apply(provider.collect());
        assert!(state.last_error.is_none());
        assert_eq!(state.history.cpu.series.values(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_disabled_panels_record_nothing() {
        let config = DashboardConfig {
            panels: crate::config::PanelSet {
                cpu: false,
                memory: false,
                disk: true,
                network: false,
                processes: false,
            },
            ..DashboardConfig::default()
        };
        let mut state = AppState::new(config);
        state.apply(Ok(MockProvider::snapshot(50.0, 50.0)));
        assert!(state.history.cpu.series.is_empty());
        assert!(state.history.memory.series.is_empty());
        assert!(state.current.is_some());
    }
}
