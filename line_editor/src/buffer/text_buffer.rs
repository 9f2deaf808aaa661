// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BufferState, DEBUG_LINE_EDITOR_BUFFER, grapheme_range, next_grapheme_boundary,
            next_word_range, previous_word_range};
use std::collections::VecDeque;

/// Maximum number of undo snapshots. Pushing past this drops the oldest one.
pub const UNDO_STACK_SIZE_MAX: usize = 100;

/// The editable line of a single prompt session.
///
/// # State
///
/// - The current [`BufferState`] (text and cursor). Every mutation builds a new snapshot
///   and swaps it in, the cursor of which is always snapped to a grapheme cluster
///   boundary.
/// - A read only copy of the history entries (oldest first) and the position being
///   shown. `history_position == history.len()` is the live line. While browsing, the
///   live line is kept in a stash so that coming back restores it exactly.
/// - A bounded stack of undo snapshots. The buffer never pushes on its own, callers
///   decide what an undo step is by calling [`TextBuffer::save_state`] before an edit
///   (or using [`TextBuffer::with_undo`]).
///
/// # Edge cases
///
/// Nothing here fails. Moving or deleting past either end of the text is a no-op,
/// offsets that are out of range or inside a cluster are clamped and snapped, and undo
/// with an empty stack does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    prompt: String,
    state: BufferState,
    history: Vec<String>,
    history_position: usize,
    stash: String,
    saved_states: VecDeque<BufferState>,
}

impl TextBuffer {
    #[must_use]
    pub fn new(prompt: impl Into<String>, history: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            state: BufferState::default(),
            history_position: history.len(),
            history,
            stash: String::new(),
            saved_states: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) { self.prompt = prompt.into(); }

    #[must_use]
    pub fn state(&self) -> &BufferState { &self.state }

    #[must_use]
    pub fn text(&self) -> &str { self.state.text() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.state.cursor() }

    #[must_use]
    pub fn history(&self) -> &[String] { &self.history }

    /// Index of the history entry being shown, `history().len()` for the live line.
    #[must_use]
    pub fn history_position(&self) -> usize { self.history_position }

    /// Replace the whole state. `cursor` is snapped to a cluster boundary.
    pub fn set_state(&mut self, text: impl Into<String>, cursor: usize) {
        self.state = BufferState::new(text, cursor);
    }

    pub fn move_cursor(&mut self, to: usize) {
        if self.state.cursor() == to {
            return;
        }
        let text = self.state.text().to_owned();
        self.set_state(text, to);
    }

    /// Splice `replacement` into `start..end` and leave the cursor right after it. Both
    /// offsets are clamped and snapped to cluster boundaries first.
    pub fn replace_text(&mut self, start: usize, end: usize, replacement: &str) {
        if start == end && replacement.is_empty() {
            return;
        }

        let text = self.state.text();
        let (start, end) = (start.min(end), start.max(end));
        let start = next_grapheme_boundary(text, start);
        let end = next_grapheme_boundary(text, end);

        let mut new_text = String::with_capacity(text.len() - (end - start) + replacement.len());
        new_text.push_str(&text[..start]);
        new_text.push_str(replacement);
        new_text.push_str(&text[end..]);

        self.set_state(new_text, start + replacement.len());
    }

    pub fn insert_text(&mut self, insertion: &str) {
        let cursor = self.state.cursor();
        self.replace_text(cursor, cursor, insertion);
    }

    pub fn delete_text(&mut self, start: usize, end: usize) {
        self.replace_text(start, end, "");
    }
}

/// Deletion and cursor movement.
impl TextBuffer {
    pub fn delete_backward(&mut self) {
        if self.state.is_cursor_at_start() {
            return;
        }
        let range = grapheme_range(self.text(), self.cursor() - 1);
        self.delete_text(range.start, range.end);
    }

    pub fn delete_forward(&mut self) {
        if self.state.is_cursor_at_end() {
            return;
        }
        let range = grapheme_range(self.text(), self.cursor());
        self.delete_text(range.start, range.end);
    }

    pub fn cut_to_start(&mut self) { self.delete_text(0, self.cursor()); }

    pub fn cut_to_end(&mut self) { self.delete_text(self.cursor(), self.text().len()); }

    pub fn cut_previous_word(&mut self) {
        if self.state.is_cursor_at_start() {
            return;
        }
        let range = previous_word_range(self.text(), self.cursor());
        self.delete_text(range.start, self.cursor());
    }

    pub fn cut_next_word(&mut self) {
        if self.state.is_cursor_at_end() {
            return;
        }
        let range = next_word_range(self.text(), self.cursor());
        self.delete_text(self.cursor(), range.end);
    }

    pub fn move_to_start(&mut self) { self.move_cursor(0); }

    pub fn move_to_end(&mut self) { self.move_cursor(self.text().len()); }

    pub fn move_backward(&mut self) {
        if self.state.is_cursor_at_start() {
            return;
        }
        let range = grapheme_range(self.text(), self.cursor() - 1);
        self.move_cursor(range.start);
    }

    pub fn move_forward(&mut self) {
        if self.state.is_cursor_at_end() {
            return;
        }
        let range = grapheme_range(self.text(), self.cursor());
        self.move_cursor(range.end);
    }

    pub fn move_backward_word(&mut self) {
        if self.state.is_cursor_at_start() {
            return;
        }
        let range = previous_word_range(self.text(), self.cursor());
        self.move_cursor(range.start);
    }

    pub fn move_forward_word(&mut self) {
        if self.state.is_cursor_at_end() {
            return;
        }
        let range = next_word_range(self.text(), self.cursor());
        self.move_cursor(range.end);
    }
}

/// Undo snapshots.
impl TextBuffer {
    /// Push the current state. Call this before an edit that should be undoable as one
    /// step.
    pub fn save_state(&mut self) {
        self.saved_states.push_back(self.state.clone());
        while self.saved_states.len() > UNDO_STACK_SIZE_MAX {
            self.saved_states.pop_front();
        }
    }

    /// Pop the most recent snapshot and make it current. No-op if there is none.
    pub fn restore_state(&mut self) {
        if let Some(state) = self.saved_states.pop_back() {
            self.state = state;
        }
    }

    /// Go back to the oldest snapshot and forget all the others.
    pub fn reset_state(&mut self) {
        if let Some(state) = self.saved_states.pop_front() {
            self.state = state;
        }
        self.saved_states.clear();
    }

    pub fn clear_saved_states(&mut self) { self.saved_states.clear(); }

    #[must_use]
    pub fn saved_state_count(&self) -> usize { self.saved_states.len() }

    /// Runs `edit` as one undo step. The snapshot is only kept if `edit` actually changed
    /// the state, so a no-op (eg: delete backward at the start of the line) does not
    /// leave an empty undo step behind.
    pub fn with_undo(&mut self, edit: impl FnOnce(&mut Self)) {
        self.save_state();
        edit(self);
        if self.saved_states.back() == Some(&self.state) {
            self.saved_states.pop_back();
        }
    }
}

/// History navigation.
impl TextBuffer {
    /// Show history entry `to` (clamped to the live line). Leaving the live line stashes
    /// its text, coming back restores it. The loaded line has the cursor at its end and
    /// no undo snapshots.
    pub fn navigate(&mut self, to: usize) {
        let to = to.min(self.history.len());
        let from = self.history_position;
        if from == to {
            return;
        }

        if from == self.history.len() {
            self.stash = self.state.text().to_owned();
        }
        self.history_position = to;

        let text = if to == self.history.len() {
            std::mem::take(&mut self.stash)
        } else {
            self.history[to].clone()
        };
        let cursor = text.len();
        self.set_state(text, cursor);
        self.clear_saved_states();

        DEBUG_LINE_EDITOR_BUFFER.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "navigate history",
                from = %from,
                to = %to,
                text = ?self.state.text(),
            );
        });
    }

    pub fn next_history(&mut self) {
        if self.history_position == self.history.len() {
            return;
        }
        self.navigate(self.history_position + 1);
    }

    pub fn previous_history(&mut self) {
        if self.history_position == 0 {
            return;
        }
        self.navigate(self.history_position - 1);
    }
}
