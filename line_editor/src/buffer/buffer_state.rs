// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::next_grapheme_boundary;

/// Immutable snapshot of the edited line. `cursor` is a byte offset into `text` that is
/// always on a grapheme cluster boundary (see [`BufferState::new`]).
///
/// [`crate::TextBuffer`] never edits a snapshot in place, it builds a new one and swaps
/// it in. That makes a snapshot usable as an undo entry or as the renderer's memory of
/// the last frame without any copying beyond the [`Clone`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct BufferState {
    text: String,
    cursor: usize,
}

impl BufferState {
    /// The `cursor` is snapped forward to a cluster boundary and clamped to the end of
    /// `text`.
    #[must_use]
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = next_grapheme_boundary(&text, cursor);
        Self { text, cursor }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Text before the cursor.
    #[must_use]
    pub fn leading_text(&self) -> &str { &self.text[..self.cursor] }

    /// Text at and after the cursor.
    #[must_use]
    pub fn trailing_text(&self) -> &str { &self.text[self.cursor..] }

    #[must_use]
    pub fn is_cursor_at_start(&self) -> bool { self.cursor == 0 }

    #[must_use]
    pub fn is_cursor_at_end(&self) -> bool { self.cursor == self.text.len() }

    /// Consumes the snapshot and returns the text.
    #[must_use]
    pub fn into_text(self) -> String { self.text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_snaps_cursor() {
        let state = BufferState::new("e\u{301}x", 1);
        assert_eq!(state.cursor(), 3);
        assert_eq!(state.leading_text(), "e\u{301}");
        assert_eq!(state.trailing_text(), "x");

        let state = BufferState::new("abc", 100);
        assert_eq!(state.cursor(), 3);
        assert!(state.is_cursor_at_end());
        assert!(!state.is_cursor_at_start());
    }
}
