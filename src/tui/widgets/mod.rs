//! Dashboard panel widgets.

mod disk;
mod header;
mod metrics;
mod network;
mod placeholder;
mod processes;
mod trends;

pub use disk::render_disk;
pub use header::{render_footer, render_header};
pub use metrics::render_metrics;
pub use network::render_network;
pub use placeholder::render_placeholder;
pub use processes::render_processes;
pub use trends::render_trends;
