// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Terminal;
use std::{io,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

#[derive(Debug, Default)]
struct TerminalMockState {
    columns: u16,
    is_raw_mode: bool,
    raw_mode_toggle_count: usize,
}

/// A [`Terminal`] with a settable width that records raw mode changes instead of making
/// them. Clones share their state, like [`crate::StdoutMock`].
#[derive(Debug, Clone)]
pub struct TerminalMock {
    state: Arc<Mutex<TerminalMockState>>,
}

impl TerminalMock {
    #[must_use]
    pub fn new(columns: u16) -> Self {
        Self {
            state: Arc::new(Mutex::new(TerminalMockState {
                columns,
                ..TerminalMockState::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TerminalMockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Simulate a resize. The next frame picks it up.
    pub fn set_columns(&self, columns: u16) { self.lock().columns = columns; }

    #[must_use]
    pub fn is_raw_mode(&self) -> bool { self.lock().is_raw_mode }

    /// How many times raw mode was switched on or off.
    #[must_use]
    pub fn raw_mode_toggle_count(&self) -> usize { self.lock().raw_mode_toggle_count }
}

impl Terminal for TerminalMock {
    fn set_raw_mode(&self, enabled: bool) -> io::Result<()> {
        let mut state = self.lock();
        state.is_raw_mode = enabled;
        state.raw_mode_toggle_count += 1;
        Ok(())
    }

    fn columns(&self) -> io::Result<u16> { Ok(self.lock().columns) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clones_share_state() {
        let terminal = TerminalMock::new(80);
        let observer = terminal.clone();

        terminal.set_raw_mode(true).unwrap();
        terminal.set_columns(40);
        assert!(observer.is_raw_mode());
        assert_eq!(observer.columns().unwrap(), 40);

        terminal.set_raw_mode(false).unwrap();
        assert!(!observer.is_raw_mode());
        assert_eq!(observer.raw_mode_toggle_count(), 2);
    }
}
