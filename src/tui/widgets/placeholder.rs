use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::style::Styles;

/// Shown when every panel has been disabled.
pub fn render_placeholder(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" SysDash ", Styles::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Span::styled(
        "No metrics selected. Use flags to enable metrics.",
        Style::default().fg(Color::Yellow),
    ))
    .block(block);

    frame.render_widget(paragraph, area);
}
