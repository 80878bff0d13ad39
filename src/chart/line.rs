//! Smooth line chart rendering.
//!
//! The series is decimated to the grid width, normalized to rows, and
//! consecutive points are connected with Bresenham strokes so the trend reads
//! as a continuous line. Pixels are colored by local trend: rising usage is
//! unfavorable (red), falling is favorable (green).

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::{Grid, value_range, value_row};

const STROKE: char = '█';

/// Value higher than its predecessor.
const RISING: Color = Color::Red;
/// Value lower than its predecessor.
const FALLING: Color = Color::Green;
/// Value equal to its predecessor.
const FLAT: Color = Color::Yellow;
/// First point, no predecessor to compare against.
const START: Color = Color::Cyan;

/// Renders a series as a colored line chart with max/min labels.
///
/// Needs at least two samples; emits a dim "no data" placeholder otherwise.
pub fn render_line_chart(series: &[f64], width: usize, height: usize) -> Vec<Line<'static>> {
    let Some(grid) = rasterize(series, width, height) else {
        return vec![Line::from(Span::styled(
            "No data",
            Style::default().fg(Color::DarkGray),
        ))];
    };

    let max = series.iter().copied().fold(f64::MIN, f64::max);
    let min = series.iter().copied().fold(f64::MAX, f64::min);

    let mut lines = Vec::with_capacity(height + 2);
    lines.push(Line::from(Span::styled(
        format!("Max: {:.1}%", max),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for y in 0..height {
        lines.push(Line::from(grid.row_spans(y)));
    }
    lines.push(Line::from(Span::styled(
        format!("Min: {:.1}%", min),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Plots the series onto a grid. Returns `None` when there is not enough
/// data or no area to draw into.
pub(crate) fn rasterize(series: &[f64], width: usize, height: usize) -> Option<Grid> {
    if series.len() < 2 || width == 0 || height == 0 {
        return None;
    }

    let max = series.iter().copied().fold(f64::MIN, f64::max);
    let min = series.iter().copied().fold(f64::MAX, f64::min);
    let range = value_range(min, max);

    let mut grid = Grid::new(width, height);
    let mut prev: Option<(usize, usize)> = None;

    for col in 0..width {
        let idx = source_index(col, series.len(), width);
        let row = value_row(series[idx], min, range, height);
        let color = trend_color(series, idx);

        match prev {
            Some((px, py)) => draw_segment(
                &mut grid,
                (px as i32, py as i32),
                (col as i32, row as i32),
                color,
            ),
            None => grid.set(col, row, STROKE, color),
        }
        prev = Some((col, row));
    }

    Some(grid)
}

/// Nearest-neighbor decimation: column `i` samples `floor(i * len / width)`
/// when the series is wider than the grid, otherwise indexes directly. The
/// clamp lets a short series extend its last value to the right edge.
fn source_index(col: usize, len: usize, width: usize) -> usize {
    let idx = if len > width { col * len / width } else { col };
    idx.min(len - 1)
}

fn trend_color(series: &[f64], idx: usize) -> Color {
    if idx == 0 {
        return START;
    }
    if series[idx] > series[idx - 1] {
        RISING
    } else if series[idx] < series[idx - 1] {
        FALLING
    } else {
        FLAT
    }
}

/// Bresenham line rasterization between two grid points.
fn draw_segment(grid: &mut Grid, from: (i32, i32), to: (i32, i32), color: Color) {
    let (x1, y1) = to;
    let (mut cx, mut cy) = from;
    let dx = (x1 - cx).abs();
    let dy = (y1 - cy).abs();
    let sx = if cx < x1 { 1 } else { -1 };
    let sy = if cy < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if cx >= 0 && cy >= 0 {
            grid.set(cx as usize, cy as usize, STROKE, color);
        }
        if cx == x1 && cy == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            cx += sx;
        }
        if e2 < dx {
            err += dx;
            cy += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_two_samples() {
        assert!(rasterize(&[1.0], 10, 5).is_none());
        assert!(rasterize(&[], 10, 5).is_none());
        assert!(rasterize(&[1.0, 2.0], 0, 5).is_none());
    }

    #[test]
    fn test_every_column_has_a_plotted_cell() {
        let grid = rasterize(&[10.0, 20.0, 10.0], 3, 2).unwrap();
        for x in 0..3 {
            let plotted: Vec<usize> = (0..grid.height()).filter(|&y| grid.get(x, y).is_some()).collect();
            assert!(!plotted.is_empty(), "column {} empty", x);
            assert!(plotted.iter().all(|&y| y < 2));
        }
    }

    #[test]
    fn test_peak_lands_on_top_row() {
        let grid = rasterize(&[10.0, 20.0, 10.0], 3, 2).unwrap();
        // Middle column holds the maximum, which maps to row 0.
        assert!(grid.get(1, 0).is_some());
    }

    #[test]
    fn test_flat_series_single_row() {
        let grid = rasterize(&[5.0, 5.0, 5.0], 3, 4).unwrap();
        // Flat series: range falls back to 1, every point on one row.
        let mut rows = std::collections::HashSet::new();
        for x in 0..3 {
            for y in 0..4 {
                if grid.get(x, y).is_some() {
                    rows.insert(y);
                }
            }
        }
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_decimation_when_series_exceeds_width() {
        assert_eq!(source_index(0, 60, 30), 0);
        assert_eq!(source_index(15, 60, 30), 30);
        assert_eq!(source_index(29, 60, 30), 58);
        // Short series clamps to last index.
        assert_eq!(source_index(9, 4, 10), 3);
    }

    #[test]
    fn test_trend_colors() {
        let series = [10.0, 20.0, 20.0, 5.0];
        assert_eq!(trend_color(&series, 0), START);
        assert_eq!(trend_color(&series, 1), RISING);
        assert_eq!(trend_color(&series, 2), FLAT);
        assert_eq!(trend_color(&series, 3), FALLING);
    }

    #[test]
    fn test_render_line_count() {
        let lines = render_line_chart(&[10.0, 20.0, 10.0], 10, 4);
        // Max label + grid rows + min label.
        assert_eq!(lines.len(), 6);
    }
}
