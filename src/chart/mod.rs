//! ASCII/Unicode chart rendering.
//!
//! The renderers here turn numeric series into colored glyph grids for the
//! dashboard panels: a smooth line chart for trend history, an OHLC
//! candlestick chart, and proportional usage bars. All of them emit ratatui
//! [`Line`]s so widgets can place them directly into a paragraph.

mod bar;
mod candles;
mod line;

pub use bar::{threshold_color, usage_bar};
pub use candles::render_candle_chart;
pub use line::render_line_chart;

use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Glyph painted for empty grid cells.
const EMPTY_GLYPH: &str = "·";

/// A 2D grid of optionally colored glyphs.
#[derive(Debug)]
pub(crate) struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<(char, Color)>>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Paints a cell. Out-of-bounds coordinates are ignored.
    pub(crate) fn set(&mut self, x: usize, y: usize, glyph: char, color: Color) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = Some((glyph, color));
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, x: usize, y: usize) -> Option<(char, Color)> {
        self.cells.get(y * self.width + x).copied().flatten()
    }

    #[cfg(test)]
    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// One span per cell: the painted glyph, or a dim placeholder.
    pub(crate) fn row_spans(&self, y: usize) -> Vec<Span<'static>> {
        (0..self.width)
            .map(|x| match self.cells[y * self.width + x] {
                Some((glyph, color)) => {
                    Span::styled(glyph.to_string(), Style::default().fg(color))
                }
                None => Span::styled(EMPTY_GLYPH, Style::default().fg(Color::DarkGray)),
            })
            .collect()
    }
}

/// Value range for normalization; falls back to 1 for a flat series so the
/// division below never hits zero.
pub(crate) fn value_range(min: f64, max: f64) -> f64 {
    if max == min { 1.0 } else { max - min }
}

/// Maps a value onto a grid row, inverted so higher values land near the top.
pub(crate) fn value_row(value: f64, min: f64, range: f64, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let span = (height - 1) as f64;
    let normalized = (value - min) / range;
    let row = ((1.0 - normalized) * span).round();
    (row.max(0.0) as usize).min(height - 1)
}
