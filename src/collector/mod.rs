//! Metrics collection.
//!
//! The [`MetricsProvider`] trait is the boundary between the dashboard
//! pipeline and the OS: one `collect()` call per poll cycle returning a full
//! [`Snapshot`]. [`SystemCollector`] implements it on top of `sysinfo`;
//! [`mock::MockProvider`] replays scripted results for tests.

pub mod mock;
mod rates;

pub use rates::{CounterTracker, rate};

use std::time::Instant;

use sysinfo::{Disks, Networks, ProcessesToUpdate, System, Users};

use crate::model::{
    CpuMetrics, DiskIo, DiskMetrics, MemoryMetrics, NetworkMetrics, PartitionUsage, ProcessInfo,
    Snapshot, SwapMetrics, SystemInfo,
};

/// Number of top processes included in a snapshot.
const PROCESS_LIMIT: usize = 10;

/// Error produced when a snapshot cannot be collected this cycle.
#[derive(Debug, Clone)]
pub enum CollectError {
    /// The underlying metrics source is unavailable or returned no data.
    Unavailable(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Unavailable(msg) => write!(f, "metrics unavailable: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

/// Source of metric snapshots.
///
/// A collection failure is never fatal: the caller renders an error state for
/// that cycle and keeps polling.
pub trait MetricsProvider {
    /// Collects one snapshot of all tracked metrics.
    fn collect(&mut self) -> Result<Snapshot, CollectError>;

    /// Hostname reported in snapshots.
    fn hostname(&self) -> &str;
}

/// Live collector backed by `sysinfo`.
///
/// Owns the refresh state plus one [`CounterTracker`] per cumulative counter
/// (disk read/write, network sent/received). The first snapshot therefore
/// reports zero rates and near-zero CPU usage; subsequent polls measure the
/// delta since the previous one.
pub struct SystemCollector {
    sys: System,
    disks: Disks,
    networks: Networks,
    users: Users,
    hostname: String,
    disk_read: CounterTracker,
    disk_write: CounterTracker,
    net_sent: CounterTracker,
    net_recv: CounterTracker,
}

impl SystemCollector {
    /// Creates a collector and takes the initial baseline reading.
    pub fn new(hostname: Option<String>) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let hostname = hostname
            .or_else(System::host_name)
            .unwrap_or_else(|| "unknown".to_string());
        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            users: Users::new_with_refreshed_list(),
            hostname,
            disk_read: CounterTracker::new(),
            disk_write: CounterTracker::new(),
            net_sent: CounterTracker::new(),
            net_recv: CounterTracker::new(),
        }
    }

    fn cpu_metrics(&mut self) -> CpuMetrics {
        self.sys.refresh_cpu_all();
        let load = System::load_average();
        CpuMetrics {
            total: self.sys.global_cpu_usage() as f64,
            per_core: self
                .sys
                .cpus()
                .iter()
                .map(|c| c.cpu_usage() as f64)
                .collect(),
            cores: self.sys.cpus().len(),
            frequency_mhz: self.sys.cpus().first().map(|c| c.frequency()).unwrap_or(0),
            load_avg: [load.one, load.five, load.fifteen],
        }
    }

    fn memory_metrics(&mut self) -> MemoryMetrics {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = total.saturating_sub(available);
        let swap_total = self.sys.total_swap();
        let swap_used = self.sys.used_swap();
        MemoryMetrics {
            total,
            available,
            used,
            free: self.sys.free_memory(),
            percent: percent_of(used, total),
            swap: SwapMetrics {
                total: swap_total,
                used: swap_used,
                free: self.sys.free_swap(),
                percent: percent_of(swap_used, swap_total),
            },
        }
    }

    fn disk_metrics(&mut self, now: Instant) -> DiskMetrics {
        self.disks.refresh(false);
        let partitions = self
            .disks
            .list()
            .iter()
            .map(|d| {
                let total = d.total_space();
                let free = d.available_space();
                let used = total.saturating_sub(free);
                PartitionUsage {
                    device: d.name().to_string_lossy().into_owned(),
                    mountpoint: d.mount_point().to_string_lossy().into_owned(),
                    fstype: d.file_system().to_string_lossy().into_owned(),
                    total,
                    used,
                    free,
                    percent: percent_of(used, total),
                }
            })
            .collect();

        // sysinfo exposes no system-wide I/O counters, so aggregate the
        // per-process cumulative totals instead.
        let (read_bytes, write_bytes) = self.sys.processes().values().fold((0, 0), |acc, p| {
            let usage = p.disk_usage();
            (
                acc.0 + usage.total_read_bytes,
                acc.1 + usage.total_written_bytes,
            )
        });

        DiskMetrics {
            partitions,
            io: DiskIo {
                read_bytes,
                write_bytes,
                read_rate: self.disk_read.update(read_bytes, now),
                write_rate: self.disk_write.update(write_bytes, now),
            },
        }
    }

    fn network_metrics(&mut self, now: Instant) -> NetworkMetrics {
        self.networks.refresh(true);
        let (mut sent, mut recv, mut pkt_sent, mut pkt_recv) = (0u64, 0u64, 0u64, 0u64);
        for (_name, data) in self.networks.list() {
            sent += data.total_transmitted();
            recv += data.total_received();
            pkt_sent += data.total_packets_transmitted();
            pkt_recv += data.total_packets_received();
        }
        NetworkMetrics {
            bytes_sent: sent,
            bytes_recv: recv,
            bytes_sent_rate: self.net_sent.update(sent, now),
            bytes_recv_rate: self.net_recv.update(recv, now),
            packets_sent: pkt_sent,
            packets_recv: pkt_recv,
        }
    }

    fn process_metrics(&mut self) -> Vec<ProcessInfo> {
        self.sys.refresh_processes(ProcessesToUpdate::All, true);
        let total_memory = self.sys.total_memory();
        let mut processes: Vec<ProcessInfo> = self
            .sys
            .processes()
            .values()
            .map(|p| ProcessInfo {
                pid: p.pid().as_u32(),
                name: p.name().to_string_lossy().into_owned(),
                cpu: p.cpu_usage() as f64,
                memory: percent_of(p.memory(), total_memory),
                user: p
                    .user_id()
                    .and_then(|uid| self.users.get_user_by_id(uid))
                    .map(|u| u.name().to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            })
            .collect();
        processes.sort_by(|a, b| b.cpu.total_cmp(&a.cpu));
        processes.truncate(PROCESS_LIMIT);
        processes
    }

    fn system_info(&self) -> SystemInfo {
        SystemInfo {
            platform: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            boot_time: System::boot_time() as i64,
            uptime_secs: System::uptime(),
        }
    }
}

impl MetricsProvider for SystemCollector {
    fn collect(&mut self) -> Result<Snapshot, CollectError> {
        let now = Instant::now();
        let processes = self.process_metrics();
        Ok(Snapshot {
            timestamp: chrono::Utc::now().timestamp(),
            hostname: self.hostname.clone(),
            cpu: self.cpu_metrics(),
            memory: self.memory_metrics(),
            disk: self.disk_metrics(now),
            network: self.network_metrics(now),
            gpu: Default::default(),
            processes,
            system: self.system_info(),
        })
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }
}

fn percent_of(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(50, 200), 25.0);
        assert_eq!(percent_of(10, 0), 0.0);
    }
}
