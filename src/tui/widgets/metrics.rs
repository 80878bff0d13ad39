//! CPU and memory gauges panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::chart::usage_bar;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

/// Width of the metric name column.
const NAME_WIDTH: usize = 15;
/// Width of the bar gauges.
const BAR_WIDTH: usize = 30;
/// Only the first cores are shown, the panel has limited height.
const MAX_CORES: usize = 8;

pub fn render_metrics(frame: &mut Frame, area: Rect, state: &AppState) {
    let panels = &state.config.panels;
    let mut title_parts = Vec::new();
    if panels.cpu {
        title_parts.push("CPU");
    }
    if panels.memory {
        title_parts.push("Memory");
    }
    let title = if title_parts.is_empty() {
        "Metrics".to_string()
    } else {
        title_parts.join(" & ")
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Styles::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::METRICS_BORDER));

    let Some(snapshot) = state.current.as_ref() else {
        frame.render_widget(
            Paragraph::new(Span::styled("Collecting metrics...", Styles::dim())).block(block),
            area,
        );
        return;
    };

    let mut lines = Vec::new();
    if panels.cpu {
        lines.push(gauge_row("CPU", format!("{:.1}%", snapshot.cpu.total), snapshot.cpu.total));
    }
    if panels.memory {
        lines.push(gauge_row(
            "Memory",
            format!(
                "{:.1}% ({:.1}/{:.1} GB)",
                snapshot.memory.percent,
                gb(snapshot.memory.used),
                gb(snapshot.memory.total)
            ),
            snapshot.memory.percent,
        ));
        lines.push(gauge_row(
            "Swap",
            format!(
                "{:.1}% ({:.1}/{:.1} GB)",
                snapshot.memory.swap.percent,
                gb(snapshot.memory.swap.used),
                gb(snapshot.memory.swap.total)
            ),
            snapshot.memory.swap.percent,
        ));
    }
    if panels.cpu {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("CPU Cores", Styles::title())));
        for (i, usage) in snapshot.cpu.per_core.iter().take(MAX_CORES).enumerate() {
            lines.push(gauge_row(
                &format!("  Core {}", i),
                format!("{:.1}%", usage),
                *usage,
            ));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "Cores: {} | Freq: {} MHz | Load: {:.2} {:.2} {:.2}",
                snapshot.cpu.cores,
                snapshot.cpu.frequency_mhz,
                snapshot.cpu.load_avg[0],
                snapshot.cpu.load_avg[1],
                snapshot.cpu.load_avg[2]
            ),
            Styles::dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn gauge_row(name: &str, value: String, percent: f64) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:<NAME_WIDTH$}", name), Style::default().fg(Theme::TITLE)),
        Span::raw(format!("{:>24}  ", value)),
    ];
    spans.extend(usage_bar(percent, 100.0, BAR_WIDTH));
    Line::from(spans)
}

fn gb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0 * 1024.0)
}
