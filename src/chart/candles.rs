//! OHLC candlestick chart rendering.
//!
//! Candles are drawn trading-platform style: a filled body between the open
//! and close rows, thin wicks out to the high and low rows, green for bullish
//! candles and red for bearish ones. Row labels on the left show the
//! interpolated value at each row.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{Grid, value_range, value_row};
use crate::history::Candle;

const BODY: char = '█';
const WICK: char = '│';

/// Fixed candle body width in columns.
const CANDLE_WIDTH: usize = 8;
/// Only the most recent candles are drawn, for legibility.
const MAX_VISIBLE: usize = 5;

const BULLISH: Color = Color::Green;
const BEARISH: Color = Color::Red;

/// Width of the row label prefix ("xxx.x% │ ").
const LABEL_WIDTH: usize = 9;

/// Renders a candle series as a colored chart with labels, axis, legend and
/// summary. Emits a dim placeholder while no candle has completed yet.
pub fn render_candle_chart(candles: &[Candle], width: usize, height: usize) -> Vec<Line<'static>> {
    if candles.is_empty() || width <= CANDLE_WIDTH || height < 2 {
        return vec![Line::from(Span::styled(
            "Collecting data for candlestick chart...",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let visible = &candles[candles.len().saturating_sub(MAX_VISIBLE)..];

    let max = visible.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let min = visible.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let range = value_range(min, max);

    let grid = rasterize(visible, width, height, min, range);

    let mut lines = Vec::with_capacity(height + 3);
    for y in 0..height {
        let label_value = min + (1.0 - y as f64 / (height - 1) as f64) * range;
        let mut spans = vec![Span::raw(format!("{:5.1}% │ ", label_value))];
        spans.extend(grid.row_spans(y));
        lines.push(Line::from(spans));
    }

    // X axis beneath the grid, aligned with the label prefix.
    lines.push(Line::from(format!(
        "{}└{}",
        " ".repeat(LABEL_WIDTH - 2),
        "─".repeat(width)
    )));

    lines.push(Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH - 1)),
        Span::styled("Legend: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("█ Bullish (Up)", Style::default().fg(BULLISH)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled("█ Bearish (Down)", Style::default().fg(BEARISH)),
        Span::styled(" │ Wick (High/Low)", Style::default().fg(Color::DarkGray)),
    ]));

    let plural = if visible.len() > 1 { "s" } else { "" };
    lines.push(Line::from(Span::styled(
        format!(
            "{}Showing {} candle{} | Range: {:.1}% - {:.1}%",
            " ".repeat(LABEL_WIDTH - 1),
            visible.len(),
            plural,
            min,
            max
        ),
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn rasterize(candles: &[Candle], width: usize, height: usize, min: f64, range: f64) -> Grid {
    let mut grid = Grid::new(width, height);

    // Distribute leftover width as equal gaps before/between/after candles.
    let gap = width.saturating_sub(candles.len() * CANDLE_WIDTH) / (candles.len() + 1);

    for (idx, candle) in candles.iter().enumerate() {
        let x_start = gap + idx * (CANDLE_WIDTH + gap);
        if x_start + CANDLE_WIDTH >= width {
            // Not enough room; remaining candles are silently truncated.
            break;
        }
        let x_center = x_start + CANDLE_WIDTH / 2;

        let open_row = value_row(candle.open, min, range, height);
        let close_row = value_row(candle.close, min, range, height);
        let high_row = value_row(candle.high, min, range, height);
        let low_row = value_row(candle.low, min, range, height);

        let color = if candle.is_bullish() { BULLISH } else { BEARISH };

        let body_top = open_row.min(close_row);
        let mut body_bottom = open_row.max(close_row);
        // Body is always at least one row tall, even when open == close.
        if body_top == body_bottom {
            body_bottom = (body_top + 1).min(height - 1);
        }

        // Upper wick, from the high down to the body.
        for y in high_row..body_top {
            grid.set(x_center, y, WICK, color);
        }
        // Body block across the full candle width.
        for y in body_top..=body_bottom {
            for dx in 0..CANDLE_WIDTH {
                grid.set(x_start + dx, y, BODY, color);
            }
        }
        // Lower wick, from the body down to the low.
        for y in (body_bottom + 1)..=low_row {
            grid.set(x_center, y, WICK, color);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn test_empty_series_placeholder() {
        let lines = render_candle_chart(&[], 70, 12);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_output_line_count() {
        let lines = render_candle_chart(&[candle(10.0, 40.0, 5.0, 30.0)], 70, 12);
        // Grid rows + axis + legend + summary.
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn test_flat_candle_body_is_at_least_one_row() {
        let grid = rasterize(&[candle(20.0, 20.0, 20.0, 20.0)], 30, 10, 20.0, 1.0);
        let plotted = (0..10)
            .flat_map(|y| (0..30).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.get(x, y).is_some())
            .count();
        assert!(plotted >= CANDLE_WIDTH);
    }

    #[test]
    fn test_bullish_and_bearish_colors() {
        let candles = [candle(10.0, 40.0, 5.0, 30.0), candle(30.0, 35.0, 10.0, 15.0)];
        let grid = rasterize(&candles, 40, 10, 5.0, 35.0);
        let mut seen = std::collections::HashSet::new();
        for y in 0..10 {
            for x in 0..40 {
                if let Some((_, color)) = grid.get(x, y) {
                    seen.insert(format!("{:?}", color));
                }
            }
        }
        assert!(seen.contains("Green"));
        assert!(seen.contains("Red"));
    }

    #[test]
    fn test_truncates_when_width_too_small() {
        // Five candles cannot fit into 20 columns; must not panic.
        let candles: Vec<Candle> = (0..5).map(|i| candle(10.0 + i as f64, 40.0, 5.0, 30.0)).collect();
        let lines = render_candle_chart(&candles, 20, 8);
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_visible_capped_to_five() {
        let candles: Vec<Candle> = (0..12).map(|i| candle(10.0, 40.0, 5.0, 20.0 + i as f64)).collect();
        let lines = render_candle_chart(&candles, 70, 12);
        let summary = &lines[lines.len() - 1];
        let text: String = summary.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Showing 5 candles"));
    }
}
