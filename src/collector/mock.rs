//! Scripted metrics provider for tests.

use std::collections::VecDeque;

use super::{CollectError, MetricsProvider};
use crate::model::Snapshot;

/// Provider that replays a scripted sequence of collection results.
///
/// Once the script is exhausted every further `collect()` fails, so tests
/// never loop forever on stale data.
pub struct MockProvider {
    hostname: String,
    script: VecDeque<Result<Snapshot, CollectError>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            hostname: "mockhost".to_string(),
            script: VecDeque::new(),
        }
    }

    /// Queues a successful snapshot with the given CPU and memory percent.
    pub fn push_sample(&mut self, cpu_percent: f64, memory_percent: f64) -> &mut Self {
        self.script
            .push_back(Ok(Self::snapshot(cpu_percent, memory_percent)));
        self
    }

    /// Queues a collection failure.
    pub fn push_failure(&mut self, message: &str) -> &mut Self {
        self.script
            .push_back(Err(CollectError::Unavailable(message.to_string())));
        self
    }

    /// Builds a minimal synthetic snapshot carrying the two trend metrics.
    pub fn snapshot(cpu_percent: f64, memory_percent: f64) -> Snapshot {
        let mut snapshot = Snapshot {
            timestamp: 1_700_000_000,
            hostname: "mockhost".to_string(),
            ..Snapshot::default()
        };
        snapshot.cpu.total = cpu_percent;
        snapshot.cpu.per_core = vec![cpu_percent];
        snapshot.cpu.cores = 1;
        snapshot.memory.percent = memory_percent;
        snapshot.memory.total = 1024 * 1024 * 1024;
        snapshot.memory.used = (snapshot.memory.total as f64 * memory_percent / 100.0) as u64;
        snapshot
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for MockProvider {
    fn collect(&mut self) -> Result<Snapshot, CollectError> {
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(CollectError::Unavailable("script exhausted".to_string())))
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_replays_script_in_order() {
        let mut provider = MockProvider::new();
        provider.push_sample(10.0, 50.0).push_failure("boom");

        let first = provider.collect().unwrap();
        assert_eq!(first.cpu.total, 10.0);
        assert!(provider.collect().is_err());
        // Exhausted script keeps failing.
        assert!(provider.collect().is_err());
    }
}
