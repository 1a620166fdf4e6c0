//! Event handling for TUI
//!
//! Polls the terminal on a background thread and forwards key presses,
//! resizes and ticks over a channel.

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal was resized
    Resize(u16, u16),
    /// Key was pressed
    Key(KeyEvent),
    /// Tick event for periodic updates
    Tick,
}

/// Event handler that runs in a separate thread
pub struct EventHandler {
    /// Receiver for events
    rx: mpsc::Receiver<Event>,
    /// Handle to the event thread (kept for cleanup)
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate.
    ///
    /// The tick rate determines how often Tick events are generated.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || loop {
            let next = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    // Only presses; release/repeat events would double-type
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                    Ok(_) => None,
                    Err(e) => {
                        warn!(error = %e, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => Some(Event::Tick),
                Err(e) => {
                    warn!(error = %e, "failed to poll terminal events");
                    break;
                }
            };

            if let Some(event) = next {
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            _handle: handle,
        }
    }

    /// Get the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event> {
        self.rx
            .recv()
            .map_err(|e| anyhow::anyhow!("Event channel closed: {}", e))
    }
}
