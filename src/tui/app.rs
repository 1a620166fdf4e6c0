//! Terminal lifecycle for the TUI
//!
//! [`Tui`] puts the terminal into raw mode on the alternate screen and puts
//! it back on drop or panic, whichever comes first.

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::debug;

use super::event::{Event, EventHandler};

/// Raw-mode terminal plus its event source.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
}

impl Tui {
    /// Enter raw mode and the alternate screen.
    ///
    /// Each step is rolled back if a later one fails.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore();
                return Err(e).context("Failed to create terminal");
            }
        };

        install_panic_hook();
        debug!("terminal initialized");
        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
        })
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Block until the next event arrives.
    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore();
        let _ = self.terminal.show_cursor();
        debug!("terminal restored");
    }
}

/// Leave the alternate screen and raw mode, ignoring failures.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

// A panic inside the loop would otherwise print into the alternate screen
// and leave the shell in raw mode.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}
