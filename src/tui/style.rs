//! Color scheme and styles for the dashboard panels.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const TITLE: Color = Color::Cyan;
    pub const HOST: Color = Color::Green;
    pub const UPTIME: Color = Color::Yellow;
    pub const CLOCK: Color = Color::LightBlue;

    // Panel border colors.
    pub const METRICS_BORDER: Color = Color::Green;
    pub const TRENDS_BORDER: Color = Color::Yellow;
    pub const DISK_BORDER: Color = Color::Yellow;
    pub const NET_BORDER: Color = Color::Blue;
    pub const PROC_BORDER: Color = Color::Magenta;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Bold panel title style.
    pub fn title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Section label inside a panel.
    pub fn section(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Collection error style.
    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }
}
