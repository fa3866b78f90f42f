//! Event handling for the TUI
//!
//! This module reads terminal events (key presses, resize) with crossterm.
//! Polling happens on the calling thread: each event is returned and fully
//! handled before the next one is read.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::io;
use std::time::{Duration, Instant};

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

/// Event source for terminal events
pub struct EventHandler {
    /// Interval between tick events
    tick_rate: Duration,
    /// When the last tick was emitted
    last_tick: Instant,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Get the next event, blocking until a key, resize or tick arrives
    pub fn next(&mut self) -> io::Result<Event> {
        loop {
            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                match event::read()? {
                    CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
                    CrosstermEvent::Resize(width, height) => {
                        return Ok(Event::Resize(width, height))
                    }
                    _ => {}
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.last_tick = Instant::now();
                return Ok(Event::Tick);
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
