//! Input and tick events for the poll-render loop.
//!
//! A background thread multiplexes terminal input and the poll timer onto one
//! channel. Ticks fire on a fixed deadline schedule: the poll timeout is the
//! time remaining until the next deadline, so a burst of key or resize events
//! cannot postpone data collection.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Poll deadline reached, collect and redraw.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize (width).
    Resize(u16),
}

/// Pumps terminal events and ticks from a background thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive to prevent channel closure.
    _tx: Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut deadline = Instant::now() + tick_rate;
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if event::poll(timeout).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let forwarded = match evt {
                        CrosstermEvent::Key(key) => event_tx.send(Event::Key(key)),
                        CrosstermEvent::Resize(w, _) => event_tx.send(Event::Resize(w)),
                        _ => Ok(()),
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                let now = Instant::now();
                if now >= deadline {
                    if event_tx.send(Event::Tick).is_err() {
                        break;
                    }
                    deadline = next_deadline(deadline, now, tick_rate);
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Advances the tick deadline by one period. A deadline that has already
/// slipped a full period behind (a stalled draw, a suspended terminal) is
/// re-anchored to now instead of emitting a burst of catch-up ticks.
fn next_deadline(deadline: Instant, now: Instant, tick_rate: Duration) -> Instant {
    let next = deadline + tick_rate;
    if next <= now { now + tick_rate } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_advances_by_one_period() {
        let rate = Duration::from_secs(1);
        let t0 = Instant::now();
        let deadline = t0 + rate;
        // Tick fired slightly late; schedule stays anchored to the deadline.
        let next = next_deadline(deadline, deadline + Duration::from_millis(50), rate);
        assert_eq!(next, deadline + rate);
    }

    #[test]
    fn test_deadline_reanchors_after_stall() {
        let rate = Duration::from_secs(1);
        let t0 = Instant::now();
        let deadline = t0 + rate;
        let late = deadline + Duration::from_secs(5);
        let next = next_deadline(deadline, late, rate);
        assert_eq!(next, late + rate);
    }

    #[test]
    fn test_elapsed_deadline_polls_without_waiting() {
        let deadline = Instant::now();
        // Past deadlines saturate to a zero timeout, never underflow.
        assert_eq!(
            deadline.saturating_duration_since(deadline + Duration::from_secs(1)),
            Duration::ZERO
        );
    }
}
