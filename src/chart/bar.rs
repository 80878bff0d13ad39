//! Proportional usage bars with threshold coloring.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Maps a raw percentage onto the threshold color bands.
pub fn threshold_color(value: f64) -> Color {
    if value < 50.0 {
        Color::Green
    } else if value < 75.0 {
        Color::Yellow
    } else if value < 90.0 {
        Color::LightRed
    } else {
        Color::Red
    }
}

/// Renders a value as a proportionally filled bar followed by the numeric
/// value. Values above `max` render as a fully filled bar.
pub fn usage_bar(value: f64, max: f64, width: usize) -> Vec<Span<'static>> {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    let filled = ((ratio * width as f64).round().max(0.0) as usize).min(width);

    vec![
        Span::styled(
            FILLED.repeat(filled),
            Style::default().fg(threshold_color(value)),
        ),
        Span::styled(
            EMPTY.repeat(width - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {:.0}%", value)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_cells(spans: &[Span<'_>]) -> usize {
        spans[0].content.chars().count()
    }

    #[test]
    fn test_bar_fill_proportion() {
        let spans = usage_bar(50.0, 100.0, 20);
        assert_eq!(filled_cells(&spans), 10);
        assert_eq!(spans[1].content.chars().count(), 10);
    }

    #[test]
    fn test_bar_clamps_above_max() {
        let spans = usage_bar(150.0, 100.0, 20);
        assert_eq!(filled_cells(&spans), 20);
        assert!(spans[1].content.is_empty());
    }

    #[test]
    fn test_bar_zero_max() {
        let spans = usage_bar(10.0, 0.0, 20);
        assert_eq!(filled_cells(&spans), 0);
    }

    #[test]
    fn test_threshold_bands() {
        assert_eq!(threshold_color(10.0), Color::Green);
        assert_eq!(threshold_color(60.0), Color::Yellow);
        assert_eq!(threshold_color(80.0), Color::LightRed);
        assert_eq!(threshold_color(95.0), Color::Red);
    }
}
