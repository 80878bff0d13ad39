//! Main TUI application.

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::collector::MetricsProvider;
use crate::config::DashboardConfig;

use super::event::{Event, EventHandler};
use super::layout::{Region, build_layout};
use super::render::render;
use super::state::AppState;

enum KeyAction {
    Quit,
    TogglePause,
    None,
}

/// Main TUI application: owns the provider, the state and the layout tree.
pub struct App<P: MetricsProvider> {
    provider: P,
    state: AppState,
    layout: Region,
    should_quit: bool,
}

impl<P: MetricsProvider> App<P> {
    pub fn new(provider: P, config: DashboardConfig) -> Self {
        let layout = build_layout(&config.panels);
        Self {
            provider,
            state: AppState::new(config),
            layout,
            should_quit: false,
        }
    }

    /// Runs the poll-render loop until the user quits.
    ///
    /// The terminal is restored on every exit path; a render error must not
    /// leave the screen in raw mode.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        let events = EventHandler::new(self.state.config.interval);

        // Initial data fetch so the first frame has content.
        self.poll();

        loop {
            terminal.draw(|frame| render(frame, &self.state, &self.layout))?;

            match events.next() {
                Ok(Event::Tick) => {
                    if !self.state.paused {
                        self.poll();
                    }
                }
                Ok(Event::Key(key)) => match handle_key(key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::TogglePause => self.state.paused = !self.state.paused,
                    KeyAction::None => {}
                },
                // Falls through to the redraw at the top of the loop.
                Ok(Event::Resize(_)) => {}
                Err(_) => {
                    // Event thread gone; nothing left to wait for.
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn poll(&mut self) {
        let result = self.provider.collect();
        self.state.apply(result);
    }
}

fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('p') | KeyCode::Char(' ') => KeyAction::TogglePause,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert!(matches!(handle_key(press(KeyCode::Char('q'))), KeyAction::Quit));
        assert!(matches!(handle_key(press(KeyCode::Esc)), KeyAction::Quit));
        assert!(matches!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        ));
    }

    #[test]
    fn test_pause_keys() {
        assert!(matches!(
            handle_key(press(KeyCode::Char('p'))),
            KeyAction::TogglePause
        ));
        assert!(matches!(
            handle_key(press(KeyCode::Char(' '))),
            KeyAction::TogglePause
        ));
        assert!(matches!(handle_key(press(KeyCode::Char('x'))), KeyAction::None));
    }
}
