// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};
use std::{io, ops::Deref};

/// The terminal controls a prompt session needs besides reading and writing.
pub trait Terminal {
    /// Turn raw mode (no line buffering, no echo, no output post processing) on or off.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the terminal mode can't be changed.
    fn set_raw_mode(&self, enabled: bool) -> io::Result<()>;

    /// Current width in columns. This is asked for before every frame, so don't cache it.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the size can't be queried.
    fn columns(&self) -> io::Result<u16>;
}

/// The real terminal, via [`crossterm::terminal`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermTerminal;

impl Terminal for CrosstermTerminal {
    fn set_raw_mode(&self, enabled: bool) -> io::Result<()> {
        if enabled {
            enable_raw_mode()
        } else {
            disable_raw_mode()
        }
    }

    fn columns(&self) -> io::Result<u16> { size().map(|(columns, _rows)| columns) }
}

/// Raw mode for as long as this is alive. Dropping it (normal return, `?`, or a panic
/// unwinding through the session) turns raw mode back off.
#[derive(Debug)]
pub struct RawModeGuard<'a, T: Terminal> {
    terminal: &'a T,
}

impl<'a, T: Terminal> RawModeGuard<'a, T> {
    /// # Errors
    ///
    /// Returns an [`io::Error`] if raw mode can't be enabled. Nothing is restored in
    /// that case since nothing was changed.
    pub fn try_new(terminal: &'a T) -> io::Result<Self> {
        terminal.set_raw_mode(true)?;
        Ok(Self { terminal })
    }
}

impl<T: Terminal> Deref for RawModeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target { self.terminal }
}

impl<T: Terminal> Drop for RawModeGuard<'_, T> {
    fn drop(&mut self) {
        if let Err(error) = self.terminal.set_raw_mode(false) {
            // % is Display, ? is Debug.
            tracing::error!(message = "failed to disable raw mode", error = %error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerminalMock;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_mode_guard_restores_on_drop() {
        let terminal = TerminalMock::new(80);
        {
            let guard = RawModeGuard::try_new(&terminal).unwrap();
            assert!(terminal.is_raw_mode());
            assert_eq!(guard.columns().unwrap(), 80);
        }
        assert!(!terminal.is_raw_mode());
        assert_eq!(terminal.raw_mode_toggle_count(), 2);
    }

    #[test]
    fn test_raw_mode_guard_restores_on_panic() {
        let terminal = TerminalMock::new(80);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::try_new(&terminal).unwrap();
            panic!("session blew up");
        }));
        assert!(result.is_err());
        assert!(!terminal.is_raw_mode());
    }
}
