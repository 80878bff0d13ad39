//! Disk usage panel: partition gauges and I/O rates.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::chart::usage_bar;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

/// Partitions shown, panel height is limited.
const MAX_PARTITIONS: usize = 5;
const BAR_WIDTH: usize = 20;

pub fn render_disk(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Span::styled(" Disk Usage ", Styles::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::DISK_BORDER));

    let Some(snapshot) = state.current.as_ref() else {
        frame.render_widget(
            Paragraph::new(Span::styled("Collecting metrics...", Styles::dim())).block(block),
            area,
        );
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{:<14} {:>12}  Usage", "Device", "Used"),
        Styles::table_header(),
    ))];

    for partition in snapshot.disk.partitions.iter().take(MAX_PARTITIONS) {
        let mount: String = partition.mountpoint.chars().take(14).collect();
        let mut spans = vec![Span::raw(format!(
            "{:<14} {:>12}  ",
            mount,
            format!("{:.0}/{:.0}GB", gb(partition.used), gb(partition.total))
        ))];
        spans.extend(usage_bar(partition.percent, 100.0, BAR_WIDTH));
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("I/O Rates", Styles::title())));
    lines.push(Line::from(format!(
        "  Read   {:>12}",
        format!("{:.2} MB/s", mb(snapshot.disk.io.read_rate))
    )));
    lines.push(Line::from(format!(
        "  Write  {:>12}",
        format!("{:.2} MB/s", mb(snapshot.disk.io.write_rate))
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn gb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0 * 1024.0)
}

fn mb(bytes: f64) -> f64 {
    bytes / (1024.0 * 1024.0)
}
