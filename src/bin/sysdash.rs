//! sysdash - Interactive terminal dashboard for host metrics.
//!
//! Usage:
//!   sysdash                  # all panels, 1 second interval
//!   sysdash -i 0.5           # faster polling
//!   sysdash --cpu-only       # CPU panel only
//!   sysdash --no-processes   # hide the process table

use std::time::Duration;

use clap::Parser;

use sysdash::collector::SystemCollector;
use sysdash::config::{DashboardConfig, PanelSet};
use sysdash::tui::App;

/// Interactive terminal dashboard for host metrics.
#[derive(Parser)]
#[command(name = "sysdash", about = "Terminal system metrics dashboard", version)]
struct Args {
    /// Poll interval in seconds (minimum 0.1).
    #[arg(short, long, default_value = "1.0")]
    interval: f64,

    /// Hostname shown in the header instead of the detected one.
    #[arg(long)]
    hostname: Option<String>,

    /// Show only CPU metrics.
    #[arg(long)]
    cpu_only: bool,

    /// Show only memory metrics.
    #[arg(long)]
    memory_only: bool,

    /// Show only disk metrics.
    #[arg(long)]
    disk_only: bool,

    /// Show only network metrics.
    #[arg(long)]
    network_only: bool,

    /// Show only the process table.
    #[arg(long)]
    processes_only: bool,

    /// Hide CPU metrics.
    #[arg(long)]
    no_cpu: bool,

    /// Hide memory metrics.
    #[arg(long)]
    no_memory: bool,

    /// Hide disk metrics.
    #[arg(long)]
    no_disk: bool,

    /// Hide network metrics.
    #[arg(long)]
    no_network: bool,

    /// Hide the process table.
    #[arg(long)]
    no_processes: bool,
}

impl Args {
    /// Resolves the panel flags. An `--*-only` flag wins over `--no-*` flags;
    /// several `--*-only` flags combine.
    fn panels(&self) -> PanelSet {
        let any_only = self.cpu_only
            || self.memory_only
            || self.disk_only
            || self.network_only
            || self.processes_only;
        if any_only {
            PanelSet {
                cpu: self.cpu_only,
                memory: self.memory_only,
                disk: self.disk_only,
                network: self.network_only,
                processes: self.processes_only,
            }
        } else {
            PanelSet {
                cpu: !self.no_cpu,
                memory: !self.no_memory,
                disk: !self.no_disk,
                network: !self.no_network,
                processes: !self.no_processes,
            }
        }
    }
}

/// An interval must be a finite number of at least 0.1 seconds; NaN and
/// infinities fail the check rather than reaching `Duration::from_secs_f64`.
fn interval_is_valid(interval: f64) -> bool {
    interval.is_finite() && interval >= 0.1
}

fn main() {
    let args = Args::parse();

    if !interval_is_valid(args.interval) {
        eprintln!("Error: interval must be at least 0.1 seconds");
        std::process::exit(1);
    }

    let config = DashboardConfig {
        hostname: args.hostname.clone(),
        interval: Duration::from_secs_f64(args.interval),
        panels: args.panels(),
        ..DashboardConfig::default()
    };

    let provider = SystemCollector::new(args.hostname);
    let app = App::new(provider, config);

    if let Err(e) = app.run() {
        eprintln!("Error running dashboard: {}", e);
        std::process::exit(1);
    }
}
