//! Header and footer bars.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};
use crate::util::format_hms;

/// Renders the header: title, hostname, dashboard uptime and clock, or the
/// current collection error when the last poll failed.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.last_error {
        Some(error) => Line::from(Span::styled(
            format!("Error collecting metrics: {}", error),
            Styles::error(),
        )),
        None => {
            let hostname = state
                .current
                .as_ref()
                .map(|s| s.hostname.as_str())
                .or(state.config.hostname.as_deref())
                .unwrap_or("unknown");
            Line::from(vec![
                Span::styled("SysDash", Styles::section(Theme::TITLE)),
                Span::styled(" | ", Styles::dim()),
                Span::styled(format!("Host: {}", hostname), Styles::section(Theme::HOST)),
                Span::styled(" | ", Styles::dim()),
                Span::styled(
                    format!("Uptime: {}", format_hms(state.uptime().as_secs())),
                    Style::default().fg(Theme::UPTIME),
                ),
                Span::styled(" | ", Styles::dim()),
                Span::styled(
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                    Style::default().fg(Theme::CLOCK),
                ),
            ])
        }
    };

    let header = Paragraph::new(line).style(Styles::header()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );
    frame.render_widget(header, area);
}

/// Renders the footer with the exit hint and the poll interval.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled("Press ", Styles::dim()),
        Span::styled("q", Styles::error()),
        Span::styled(" to exit, ", Styles::dim()),
        Span::styled("p", Styles::error()),
        Span::styled(" to pause", Styles::dim()),
        Span::styled(" | ", Styles::dim()),
        Span::styled(
            format!("Update: {:.1}s", state.config.interval.as_secs_f64()),
            Styles::dim(),
        ),
    ];
    if state.paused {
        spans.push(Span::styled(" | ", Styles::dim()));
        spans.push(Span::styled("PAUSED", Styles::error()));
    }

    let footer =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
