//! Event handling infrastructure
//!
//! Polls the terminal for input and emits ticks when nothing happened,
//! so the event loop can drain fetch outcomes at a steady rate.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::app::Action;

/// Terminal events the loop reacts to
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to the tick rate.
    ///
    /// A timeout produces a tick. Key release/repeat events are filtered
    /// out so a press counts once on every platform.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick), // Ignore other events
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_custom_tick_rate() {
        let handler = EventHandler::new(250);
        assert_eq!(handler.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn test_key_event_becomes_key_action() {
        use crossterm::event::{KeyCode, KeyModifiers};

        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let action: Action = TuiEvent::Key(key).into();

        assert_eq!(action, Action::Key(key));
    }

    #[test]
    fn test_tick_event_becomes_tick_action() {
        let action: Action = TuiEvent::Tick.into();
        assert_eq!(action, Action::Tick);
    }
}
