//! sysdash-agent - Headless metrics collector.
//!
//! Collects host metrics on an interval and forwards each snapshot as a JSON
//! line to a backend over TCP. Send failures are logged and the loop keeps
//! running.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use sysdash::collector::{MetricsProvider, SystemCollector};
use sysdash::remote::{RemoteSink, TcpJsonSink};
use sysdash::util::format_rate;

/// Connect and write timeout for the backend connection.
const SEND_TIMEOUT: Duration = Duration::from_secs(2);

/// Headless metrics collector.
#[derive(Parser)]
#[command(name = "sysdash-agent", about = "Headless system metrics collector", version)]
struct Args {
    /// Collection interval in seconds.
    #[arg(short, long, default_value = "2")]
    interval: u64,

    /// Backend address receiving JSON snapshot lines.
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    backend: String,

    /// Hostname reported in snapshots instead of the detected one.
    #[arg(long)]
    hostname: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    for directive in [
        format!("sysdash={}", level),
        format!("sysdash_agent={}", level),
    ] {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    if args.interval == 0 {
        eprintln!("Error: interval must be at least 1 second");
        std::process::exit(1);
    }

    info!("sysdash-agent {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: interval={}s, backend={}",
        args.interval, args.backend
    );

    let mut collector = SystemCollector::new(args.hostname);
    info!("Collecting as host '{}'", collector.hostname());

    let mut sink = TcpJsonSink::new(args.backend.clone(), SEND_TIMEOUT);
    if sink.health_check() {
        info!("Backend reachable at {}", args.backend);
    } else {
        warn!(
            "Backend {} unreachable, snapshots will be dropped until it comes up",
            args.backend
        );
    }

    let interval = Duration::from_secs(args.interval);

    // Setup graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    info!("Starting collection loop");

    let mut snapshot_count: u64 = 0;
    while running.load(Ordering::SeqCst) {
        match collector.collect() {
            Ok(snapshot) => {
                snapshot_count += 1;
                info!(
                    "Snapshot #{}: cpu={:.1}%, mem={:.1}%, disk r/w={}/{}, net up/down={}/{}",
                    snapshot_count,
                    snapshot.cpu.total,
                    snapshot.memory.percent,
                    format_rate(snapshot.disk.io.read_rate),
                    format_rate(snapshot.disk.io.write_rate),
                    format_rate(snapshot.network.bytes_sent_rate),
                    format_rate(snapshot.network.bytes_recv_rate),
                );

                if let Err(e) = sink.send(&snapshot) {
                    warn!("Failed to forward snapshot: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to collect snapshot: {}", e);
            }
        }

        // Sleep with periodic checks for the shutdown signal
        let sleep_interval = Duration::from_millis(250);
        let mut remaining = interval;
        while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
            let sleep_time = remaining.min(sleep_interval);
            std::thread::sleep(sleep_time);
            remaining = remaining.saturating_sub(sleep_time);
        }
    }

    info!("Shutdown complete");
}
