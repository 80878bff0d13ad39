//! Snapshot data model.
//!
//! A [`Snapshot`] is one full reading of all tracked metrics at a point in
//! time. It is produced once per poll cycle by the metrics provider, consumed
//! by the renderers, and optionally serialized as JSON for the remote
//! collector. Field names match the agent wire format.

use serde::{Deserialize, Serialize};

/// One full reading of all tracked metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub hostname: String,
    pub cpu: CpuMetrics,
    pub memory: MemoryMetrics,
    pub disk: DiskMetrics,
    pub network: NetworkMetrics,
    /// Placeholder, always zeroed. Real GPU support is out of scope.
    pub gpu: GpuMetrics,
    /// Top processes by CPU usage, descending.
    pub processes: Vec<ProcessInfo>,
    pub system: SystemInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuMetrics {
    /// Total CPU usage in percent.
    pub total: f64,
    /// Per-core usage in percent.
    pub per_core: Vec<f64>,
    /// Number of logical cores.
    pub cores: usize,
    /// Current frequency of the first core in MHz.
    pub frequency_mhz: u64,
    /// 1/5/15 minute load averages.
    pub load_avg: [f64; 3],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
    pub swap: SwapMetrics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwapMetrics {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskMetrics {
    pub partitions: Vec<PartitionUsage>,
    pub io: DiskIo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionUsage {
    pub device: String,
    pub mountpoint: String,
    pub fstype: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f64,
}

/// Cumulative disk I/O counters plus rates derived from the previous poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskIo {
    pub read_bytes: u64,
    pub write_bytes: u64,
    /// Bytes read per second since the previous poll.
    pub read_rate: f64,
    /// Bytes written per second since the previous poll.
    pub write_rate: f64,
}

/// Cumulative network counters plus rates derived from the previous poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkMetrics {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub bytes_sent_rate: f64,
    pub bytes_recv_rate: f64,
    pub packets_sent: u64,
    pub packets_recv: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GpuMetrics {
    pub usage: f64,
    pub temperature: f64,
    pub memory_total: u64,
    pub memory_used: u64,
    pub memory_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    /// CPU usage in percent.
    pub cpu: f64,
    /// Memory usage in percent of total RAM.
    pub memory: f64,
    pub user: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemInfo {
    pub platform: String,
    /// Unix timestamp of system boot, in seconds.
    pub boot_time: i64,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = Snapshot {
            timestamp: 1_700_000_000,
            hostname: "testhost".to_string(),
            cpu: CpuMetrics {
                total: 42.5,
                per_core: vec![40.0, 45.0],
                cores: 2,
                frequency_mhz: 2400,
                load_avg: [0.5, 0.7, 1.0],
            },
            ..Snapshot::default()
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timestamp, 1_700_000_000);
        assert_eq!(back.hostname, "testhost");
        assert_eq!(back.cpu.per_core.len(), 2);
    }
}
