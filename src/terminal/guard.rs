//! Raw-mode lifetime.

use crossterm::terminal;
use std::io;

/// Keeps the terminal in raw mode while alive.
///
/// Raw mode delivers each key as it is pressed instead of after Enter, and
/// stops the terminal from echoing keys itself. Dropping the guard, also
/// during a panic unwind, restores the previous mode.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin is not a terminal or the mode switch fails.
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
