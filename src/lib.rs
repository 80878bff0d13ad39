//! sysdash - Terminal system monitoring dashboard library.
//!
//! This library provides the core functionality shared between:
//! - `sysdash` - interactive TUI dashboard
//! - `sysdash-agent` - headless collector that forwards snapshots to a backend

pub mod chart;
pub mod collector;
pub mod config;
pub mod history;
pub mod model;
pub mod remote;
pub mod tui;
pub mod util;
