//! Usage trend charts panel: line charts plus the CPU candlestick chart.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::chart::{render_candle_chart, render_line_chart};
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

/// Line charts only appear once the series has some shape to show.
const MIN_TREND_SAMPLES: usize = 6;

pub fn render_trends(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Span::styled(" Usage Trends ", Styles::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::TRENDS_BORDER));

    let config = &state.config;
    let panels = &config.panels;
    let mut lines: Vec<Line<'static>> = Vec::new();

    if panels.cpu && state.history.cpu.series.len() >= MIN_TREND_SAMPLES {
        lines.push(Line::from(Span::styled(
            "CPU Usage Trend",
            Styles::section(Color::Cyan),
        )));
        lines.extend(render_line_chart(
            state.history.cpu.series.values(),
            config.chart_width,
            config.chart_height,
        ));
    }

    if panels.memory && state.history.memory.series.len() >= MIN_TREND_SAMPLES {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "Memory Usage Trend",
            Styles::section(Color::Magenta),
        )));
        lines.extend(render_line_chart(
            state.history.memory.series.values(),
            config.chart_width,
            config.chart_height,
        ));
    }

    if panels.cpu && !state.history.cpu.candles.candles().is_empty() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "CPU Candles (OHLC)",
            Styles::section(Color::Cyan),
        )));
        lines.extend(render_candle_chart(
            state.history.cpu.candles.candles(),
            config.chart_width,
            config.candle_chart_height,
        ));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Collecting data for graphs...",
            Styles::dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
