//! Network statistics panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};
use crate::util::{format_bytes, format_rate};

pub fn render_network(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Span::styled(" Network ", Styles::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::NET_BORDER));

    let Some(snapshot) = state.current.as_ref() else {
        frame.render_widget(
            Paragraph::new(Span::styled("Collecting metrics...", Styles::dim())).block(block),
            area,
        );
        return;
    };

    let net = &snapshot.network;
    let lines = vec![
        Line::from(Span::styled("Current Rates", Styles::title())),
        Line::from(format!("  Upload    {:>14}", format_rate(net.bytes_sent_rate))),
        Line::from(format!("  Download  {:>14}", format_rate(net.bytes_recv_rate))),
        Line::default(),
        Line::from(Span::styled("Total Transfer", Styles::title())),
        Line::from(format!("  Sent      {:>14}", format_bytes(net.bytes_sent as f64))),
        Line::from(format!("  Received  {:>14}", format_bytes(net.bytes_recv as f64))),
        Line::default(),
        Line::from(Span::styled("Packets", Styles::title())),
        Line::from(format!("  Sent      {:>14}", net.packets_sent)),
        Line::from(format!("  Received  {:>14}", net.packets_recv)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
