//! Top processes table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use crate::chart::threshold_color;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};

pub fn render_processes(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(Span::styled(" Top Processes ", Styles::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::PROC_BORDER));

    let Some(snapshot) = state.current.as_ref() else {
        frame.render_widget(
            Paragraph::new(Span::styled("Collecting metrics...", Styles::dim())).block(block),
            area,
        );
        return;
    };

    let header = Row::new(["PID", "Name", "User", "CPU", "Mem"]).style(Styles::table_header());

    let rows: Vec<Row> = snapshot
        .processes
        .iter()
        .map(|p| {
            let name: String = p.name.chars().take(20).collect();
            Row::new(vec![
                Cell::from(p.pid.to_string()).style(Styles::dim()),
                Cell::from(name).style(Style::default().fg(Theme::TITLE)),
                Cell::from(p.user.clone()),
                Cell::from(format!("{:.1}%", p.cpu))
                    .style(Style::default().fg(threshold_color(p.cpu))),
                Cell::from(format!("{:.1}%", p.memory))
                    .style(Style::default().fg(threshold_color(p.memory))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
