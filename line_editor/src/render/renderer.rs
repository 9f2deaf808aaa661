// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BufferState, ControlCharsDecorator, CsiSequence, CursorPosition,
            DEBUG_LINE_EDITOR_RENDER, Decorator, EraseDisplayMode, RAW_MODE_LINE_BREAK,
            advance_cursor, wrap_cursor};
use std::{cmp::Ordering, fmt::Write, sync::Arc};

/// The last `(prefix, suffix, state)` that was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub prefix: String,
    pub suffix: String,
    pub state: BufferState,
}

/// Produces the escape sequences that turn what was last drawn into the new frame.
///
/// # How a frame is drawn
///
/// 1. Rewind: move the terminal cursor to column 0 of the row the prompt starts on. The
///    renderer knows how far that is from the text before the cursor in the last frame
///    (the cursor was parked at its end).
/// 2. Write the prompt and the whole (decorated) text, erasing to the end of each line
///    before every embedded newline, and to the end of the screen afterwards, so that
///    nothing from a longer previous frame is left behind.
/// 3. Move the cursor back up and across from the end of the content to the end of the
///    text before the cursor.
///
/// Nothing about the terminal width is remembered between frames. `columns` is passed
/// into every call so a resize is picked up by the next frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    decorator: Arc<dyn Decorator>,
    last_leading_text: String,
    last_frame: Option<RenderFrame>,
    reset_sequence: Option<String>,
}

impl Default for Renderer {
    fn default() -> Self { Self::new(Arc::new(ControlCharsDecorator)) }
}

impl Renderer {
    #[must_use]
    pub fn new(decorator: Arc<dyn Decorator>) -> Self {
        Self {
            decorator,
            last_leading_text: String::new(),
            last_frame: None,
            reset_sequence: None,
        }
    }

    /// Use `sequence` instead of the computed rewind for the next [`Renderer::update`],
    /// and make that update draw even if nothing changed. Clear screen (`ESC [ H`) uses
    /// this.
    pub fn set_reset_sequence(&mut self, sequence: impl Into<String>) {
        self.reset_sequence = Some(sequence.into());
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> { self.last_frame.as_ref() }

    /// Rewind plus [`Renderer::render`], or an empty string when `(prefix, suffix,
    /// state)` is the same as the last frame and no reset sequence is pending.
    pub fn update(
        &mut self,
        prefix: &str,
        suffix: &str,
        state: &BufferState,
        columns: usize,
    ) -> String {
        if self.reset_sequence.is_none() && self.is_last_frame(prefix, suffix, state) {
            return String::new();
        }
        let mut acc = self.take_reset_sequence(columns);
        acc.push_str(&self.render(prefix, suffix, state, columns));
        acc
    }

    /// Draws a full frame starting at column 0 of the current row, and leaves the cursor
    /// at the end of the text before the buffer's cursor.
    pub fn render(
        &mut self,
        prefix: &str,
        suffix: &str,
        state: &BufferState,
        columns: usize,
    ) -> String {
        let columns = columns.max(1);
        let (leading_text, trailing_text) = self.decorate(prefix, suffix, state);

        let end_of_leading = advance_cursor(CursorPosition::default(), columns, &leading_text);
        let target = wrap_cursor(end_of_leading, columns);
        let end_of_content = advance_cursor(end_of_leading, columns, &trailing_text);

        let mut acc = draw_content(&leading_text, &trailing_text);
        let column = match end_of_content.row.cmp(&target.row) {
            // Content ends exactly at the right margin and the cursor goes after it.
            Ordering::Less => {
                acc.push_str(RAW_MODE_LINE_BREAK);
                0
            }
            Ordering::Equal => end_of_content.column,
            Ordering::Greater => {
                let rows = end_of_content.row - target.row;
                push_csi(&mut acc, CsiSequence::CursorPrevLine(rows));
                0
            }
        };
        if column != target.column {
            push_csi(&mut acc, CsiSequence::CursorHorizontalAbsolute(target.column + 1));
        }

        DEBUG_LINE_EDITOR_RENDER.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "render",
                columns = %columns,
                target = ?target,
                end_of_content = ?end_of_content,
            );
        });

        self.remember(leading_text, prefix, suffix, state);
        acc
    }

    /// The last frame of a session. All content is drawn with the cursor after it,
    /// followed by a line break, so whatever is printed next starts on a fresh row. The
    /// renderer forgets the frame afterwards.
    pub fn finish(
        &mut self,
        prefix: &str,
        suffix: &str,
        state: &BufferState,
        columns: usize,
    ) -> String {
        let (leading_text, trailing_text) = self.decorate(prefix, suffix, state);
        let mut acc = self.take_reset_sequence(columns);
        acc.push_str(&draw_content(&leading_text, &trailing_text));
        acc.push_str(RAW_MODE_LINE_BREAK);

        self.last_leading_text.clear();
        self.last_frame = None;
        acc
    }

    fn is_last_frame(&self, prefix: &str, suffix: &str, state: &BufferState) -> bool {
        self.last_frame.as_ref().is_some_and(|frame| {
            frame.prefix == prefix && frame.suffix == suffix && &frame.state == state
        })
    }

    fn decorate(&self, prefix: &str, suffix: &str, state: &BufferState) -> (String, String) {
        let text = state.text();
        let cursor = state.cursor();
        let leading_text = format!("{prefix}{}", self.decorator.decorate(text, 0, cursor));
        let trailing_text =
            format!("{}{suffix}", self.decorator.decorate(text, cursor, text.len()));
        (leading_text, trailing_text)
    }

    fn take_reset_sequence(&mut self, columns: usize) -> String {
        self.reset_sequence.take().unwrap_or_else(|| self.rewind(columns))
    }

    /// Back to column 0 of the first row of the last frame.
    fn rewind(&self, columns: usize) -> String {
        let columns = columns.max(1);
        let pos = wrap_cursor(
            advance_cursor(CursorPosition::default(), columns, &self.last_leading_text),
            columns,
        );
        match pos.row {
            0 => CsiSequence::CursorHorizontalAbsolute(1).to_string(),
            rows => CsiSequence::CursorPrevLine(rows).to_string(),
        }
    }

    fn remember(&mut self, leading_text: String, prefix: &str, suffix: &str, state: &BufferState) {
        self.last_leading_text = leading_text;
        self.last_frame = Some(RenderFrame {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
            state: state.clone(),
        });
    }
}

fn push_csi(acc: &mut String, sequence: CsiSequence) {
    // Writing to a String never fails.
    let _unused = write!(acc, "{sequence}");
}

/// Leading and trailing text, with the rest of the line erased before every line break
/// and the rest of the screen erased at the end.
fn draw_content(leading_text: &str, trailing_text: &str) -> String {
    let line_break = format!("{}{RAW_MODE_LINE_BREAK}", CsiSequence::EraseLineToEnd);
    let mut acc = String::with_capacity(leading_text.len() + trailing_text.len() + 8);
    for text in [leading_text, trailing_text] {
        acc.push_str(&text.replace('\n', &line_break));
    }
    push_csi(&mut acc, CsiSequence::EraseDisplay(EraseDisplayMode::FromCursorToEnd));
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(text: &str, cursor: usize) -> BufferState { BufferState::new(text, cursor) }

    #[test]
    fn test_render_hello() {
        let mut renderer = Renderer::default();
        let output = renderer.render("> ", "", &state("hello", 5), 80);
        assert_eq!(output, "> hello\x1b[J");
        assert_eq!(
            advance_cursor(CursorPosition::default(), 80, &renderer.last_leading_text),
            CursorPosition::new(0, 7)
        );
    }

    #[test]
    fn test_render_cursor_in_the_middle() {
        let mut renderer = Renderer::default();
        let output = renderer.render("> ", "", &state("hello", 2), 80);
        assert_eq!(output, "> hello\x1b[J\x1b[5G");
    }

    #[test]
    fn test_render_control_char_is_escaped() {
        let mut renderer = Renderer::default();
        let output = renderer.render("> ", "", &state("\x01", 1), 80);
        assert_eq!(output, "> \x1b[7m^A\x1b[m\x1b[J");
        assert!(!output.contains('\x01'));
    }

    #[test]
    fn test_render_embedded_newline() {
        let mut renderer = Renderer::default();
        let output = renderer.render("> ", "", &state("a\nb", 0), 80);
        assert_eq!(output, "> a\x1b[K\r\nb\x1b[J\x1b[F\x1b[3G");
    }

    #[test]
    fn test_render_at_right_margin_moves_to_next_row() {
        let mut renderer = Renderer::default();
        let output = renderer.render("> ", "", &state("hello", 5), 7);
        assert_eq!(output, "> hello\x1b[J\r\n");

        // The cursor is now on the second row, so the rewind goes up one.
        let output = renderer.update("> ", "", &state("hell", 4), 7);
        assert_eq!(output, "\x1b[F> hell\x1b[J");
    }

    #[test]
    fn test_update_wrapped_line() {
        let mut renderer = Renderer::default();
        let output = renderer.update("> ", "", &state("abcdefghijkl", 12), 10);
        assert_eq!(output, "\x1b[G> abcdefghijkl\x1b[J");

        let output = renderer.update("> ", "", &state("abcdefghijkl", 0), 10);
        assert_eq!(output, "\x1b[F> abcdefghijkl\x1b[J\x1b[F\x1b[3G");
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut renderer = Renderer::default();
        let first = renderer.update("> ", "", &state("hello", 5), 80);
        assert_eq!(first, "\x1b[G> hello\x1b[J");
        let second = renderer.update("> ", "", &state("hello", 5), 80);
        assert_eq!(second, "");

        // A different prefix or suffix is a different frame.
        assert_ne!(renderer.update("$ ", "", &state("hello", 5), 80), "");
        assert_ne!(renderer.update("$ ", " [1]", &state("hello", 5), 80), "");
    }

    #[test]
    fn test_reset_sequence_forces_redraw() {
        let mut renderer = Renderer::default();
        renderer.update("> ", "", &state("hi", 2), 80);
        renderer.set_reset_sequence("\x1b[H");
        let output = renderer.update("> ", "", &state("hi", 2), 80);
        assert_eq!(output, "\x1b[H> hi\x1b[J");
        assert_eq!(renderer.update("> ", "", &state("hi", 2), 80), "");
    }

    #[test]
    fn test_suffix_comes_after_text() {
        let mut renderer = Renderer::default();
        let output = renderer.render("> ", " <", &state("ab", 1), 80);
        assert_eq!(output, "> ab <\x1b[J\x1b[4G");
    }

    #[test]
    fn test_wide_chars_wrap_early() {
        let mut renderer = Renderer::default();
        let output = renderer.render("", "", &state("日本語", 0), 5);
        assert_eq!(output, "日本語\x1b[J\x1b[F");
    }

    #[test]
    fn test_finish_parks_after_content() {
        let mut renderer = Renderer::default();
        renderer.update("> ", "", &state("hello", 0), 80);
        let output = renderer.finish("> ", "", &state("hello", 0), 80);
        assert_eq!(output, "\x1b[G> hello\x1b[J\r\n");
        assert!(renderer.last_frame().is_none());

        // Next session starts from a clean slate.
        let output = renderer.update("> ", "", &state("", 0), 80);
        assert_eq!(output, "\x1b[G> \x1b[J");
    }

    #[test]
    fn test_zero_columns_does_not_panic() {
        let mut renderer = Renderer::default();
        let output = renderer.update("> ", "", &state("ab", 2), 0);
        assert!(output.contains("> ab"));
    }

    #[test]
    fn test_columns_change_between_updates() {
        let mut renderer = Renderer::default();
        let output = renderer.update("> ", "", &state("abcdefghij", 10), 80);
        assert_eq!(output, "\x1b[G> abcdefghij\x1b[J");

        // Narrower now: the last frame takes 3 rows at width 5, the new one too.
        let output = renderer.update("> ", "", &state("abcdefghijk", 11), 5);
        assert_eq!(output, "\x1b[2F> abcdefghijk\x1b[J");
    }
}
