//! Dashboard configuration.
//!
//! All tunables are fixed at startup: the panel set never changes while the
//! dashboard runs, and history/candle capacities are shared by every trend
//! metric.

use std::time::Duration;

/// Set of metric categories enabled for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSet {
    pub cpu: bool,
    pub memory: bool,
    pub disk: bool,
    pub network: bool,
    pub processes: bool,
}

impl Default for PanelSet {
    fn default() -> Self {
        Self {
            cpu: true,
            memory: true,
            disk: true,
            network: true,
            processes: true,
        }
    }
}

impl PanelSet {
    /// Returns `true` if no category is enabled.
    pub fn is_empty(&self) -> bool {
        !(self.cpu || self.memory || self.disk || self.network || self.processes)
    }

    /// Returns `true` if any trend metric (CPU or memory) is enabled.
    /// Trend charts and candle aggregation only run for these.
    pub fn has_trends(&self) -> bool {
        self.cpu || self.memory
    }
}

/// Dashboard configuration, supplied by the CLI layer.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Hostname override. `None` uses the system hostname.
    pub hostname: Option<String>,
    /// Poll interval between snapshots.
    pub interval: Duration,
    /// Rolling history length per trend metric.
    pub history_capacity: usize,
    /// Number of consecutive samples grouped into one OHLC candle.
    pub candle_interval: usize,
    /// Maximum retained candles per trend metric.
    pub candle_capacity: usize,
    /// Line chart grid width in cells.
    pub chart_width: usize,
    /// Line chart grid height in cells.
    pub chart_height: usize,
    /// Candlestick chart grid height in cells.
    pub candle_chart_height: usize,
    /// Enabled panel categories.
    pub panels: PanelSet,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            interval: Duration::from_secs(1),
            history_capacity: 60,
            candle_interval: 5,
            candle_capacity: 20,
            chart_width: 70,
            chart_height: 10,
            candle_chart_height: 12,
            panels: PanelSet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_set_empty() {
        let none = PanelSet {
            cpu: false,
            memory: false,
            disk: false,
            network: false,
            processes: false,
        };
        assert!(none.is_empty());
        assert!(!none.has_trends());
        assert!(!PanelSet::default().is_empty());
    }

    #[test]
    fn test_trends_require_cpu_or_memory() {
        let disk_only = PanelSet {
            cpu: false,
            memory: false,
            disk: true,
            network: false,
            processes: false,
        };
        assert!(!disk_only.has_trends());

        let mem_only = PanelSet {
            cpu: false,
            memory: true,
            disk: false,
            network: false,
            processes: false,
        };
        assert!(mem_only.has_trends());
    }
}
