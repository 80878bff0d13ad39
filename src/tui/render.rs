//! Main rendering logic for the dashboard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::layout::{PanelKind, Region, ResolvedLayout};
use super::state::AppState;
use super::widgets::{
    render_disk, render_footer, render_header, render_metrics, render_network,
    render_placeholder, render_processes, render_trends,
};

/// Main render function: header, dynamically composed content area, footer.
pub fn render(frame: &mut Frame, state: &AppState, layout: &Region) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Content area
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    render_header(frame, chunks[0], state);
    render_footer(frame, chunks[2], state);

    let resolved = ResolvedLayout::new(layout, chunks[1]);
    let panels = &state.config.panels;

    if panels.is_empty() {
        render_placeholder(frame, resolved.area_for(PanelKind::Placeholder));
        return;
    }

    // Each enabled panel draws into its bound region, falling back to the
    // content root when the layout carries no region for it.
    if panels.has_trends() {
        render_metrics(frame, resolved.area_for(PanelKind::Metrics), state);
        if resolved.contains(PanelKind::Trends) {
            render_trends(frame, resolved.area_for(PanelKind::Trends), state);
        }
    }
    if panels.disk {
        render_disk(frame, resolved.area_for(PanelKind::Disk), state);
    }
    if panels.network {
        render_network(frame, resolved.area_for(PanelKind::Network), state);
    }
    if panels.processes {
        render_processes(frame, resolved.area_for(PanelKind::Processes), state);
    }
}
