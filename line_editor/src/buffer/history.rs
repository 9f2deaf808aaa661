// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

/// Maximum number of lines kept by a [`History`] unless told otherwise.
pub const HISTORY_SIZE_MAX: usize = 1_000;

/// Committed lines, oldest first. This is owned by the caller and lives across prompt
/// sessions. Each session gets a read only copy of the entries (see
/// [`crate::TextBuffer::new`]), the caller decides which outcomes are worth remembering
/// and calls [`History::add_entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    pub max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::default(),
            max_size: HISTORY_SIZE_MAX,
        }
    }
}

impl History {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Append a line. Empty lines and repeats of the most recent entry are skipped. The
    /// oldest entries are dropped once there are more than `max_size`.
    pub fn add_entry(&mut self, line: impl Into<String>) {
        let line = line.into();

        // Don't add entry if last entry was same, or line was empty.
        if line.is_empty() || self.entries.back() == Some(&line) {
            return;
        }
        self.entries.push_back(line);

        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn entries(&self) -> &VecDeque<String> { &self.entries }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Copy of the entries, oldest first, in the shape [`crate::TextBuffer`] wants.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> { self.entries.iter().cloned().collect() }
}

impl<S: Into<String>> FromIterator<S> for History {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = History::new();
        for line in iter {
            history.add_entry(line);
        }
        history
    }
}
