//! Raw mode RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode with a hidden cursor for the lifetime of the guard.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let _ = execute!(io::stdout(), Hide);
        Ok(Self { enabled: true })
    }

    /// Restore cooked mode early (also happens on drop).
    pub fn disable(&mut self) {
        if self.enabled {
            let _ = execute!(io::stdout(), Show);
            let _ = disable_raw_mode();
            self.enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
