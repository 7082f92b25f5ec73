//! Raw mode RAII guard.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    armed: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { armed: true })
    }

    /// Manually disable raw mode (also happens on drop).
    pub fn disable(&mut self) {
        if self.armed {
            let _ = disable_raw_mode();
            self.armed = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
