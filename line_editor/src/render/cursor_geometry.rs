// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::graphemes;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// No grapheme cluster is treated as wider than this many columns.
pub const MAX_CLUSTER_WIDTH: usize = 2;

/// 0 based position on the terminal, relative to where the prompt starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CursorPosition {
    pub row: usize,
    pub column: usize,
}

impl CursorPosition {
    #[must_use]
    pub fn new(row: usize, column: usize) -> Self { Self { row, column } }
}

/// Display width of a single grapheme cluster, capped at [`MAX_CLUSTER_WIDTH`].
#[must_use]
pub fn cluster_width(cluster: &str) -> usize { cluster.width().min(MAX_CLUSTER_WIDTH) }

/// Text with any ANSI escape sequences removed, so styled prompts are measured by what
/// is actually visible.
fn strip_ansi(text: &str) -> Cow<'_, str> {
    if text.contains('\x1b') {
        let stripped = strip_ansi_escapes::strip(text.as_bytes());
        Cow::Owned(String::from_utf8_lossy(&stripped).into_owned())
    } else {
        Cow::Borrowed(text)
    }
}

/// Where the cursor ends up after `text` is written starting at `pos` on a terminal that
/// is `columns` wide.
///
/// - `\n` moves to column 0 of the next row.
/// - A cluster that doesn't fit in what is left of the row wraps to the next row first.
/// - A cluster that exactly fills the row leaves the cursor at `column == columns`
///   (the terminal's pending wrap state). Use [`wrap_cursor`] to resolve that.
#[must_use]
pub fn advance_cursor(pos: CursorPosition, columns: usize, text: &str) -> CursorPosition {
    let mut pos = pos;
    for cluster in graphemes(&strip_ansi(text)) {
        if cluster == "\n" {
            pos.row += 1;
            pos.column = 0;
            continue;
        }
        let width = cluster_width(cluster);
        if pos.column + width > columns {
            pos.row += 1;
            pos.column = 0;
        }
        pos.column += width;
    }
    pos
}

/// Resolves the pending wrap state: a cursor at (or past) the right margin is really at
/// column 0 of the next row.
#[must_use]
pub fn wrap_cursor(pos: CursorPosition, columns: usize) -> CursorPosition {
    if pos.column >= columns {
        CursorPosition::new(pos.row + 1, 0)
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 80 => CursorPosition::new(0, 0) ; "empty")]
    #[test_case("> hello", 80 => CursorPosition::new(0, 7) ; "prompt and text")]
    #[test_case("> hello", 7 => CursorPosition::new(0, 7) ; "exactly fills the row")]
    #[test_case("> hello!", 7 => CursorPosition::new(1, 1) ; "wraps")]
    #[test_case("ab\ncd", 80 => CursorPosition::new(1, 2) ; "newline")]
    #[test_case("日本語", 5 => CursorPosition::new(1, 2) ; "wide cluster doesn't fit")]
    #[test_case("👍🏽e\u{301}", 80 => CursorPosition::new(0, 3) ; "clusters not code points")]
    #[test_case("\x1b[1;32m> \x1b[0mhi", 80 => CursorPosition::new(0, 4) ; "ansi styles are invisible")]
    fn test_advance_cursor(text: &str, columns: usize) -> CursorPosition {
        advance_cursor(CursorPosition::default(), columns, text)
    }

    #[test]
    fn test_advance_cursor_continues_from_position() {
        let pos = advance_cursor(CursorPosition::new(2, 3), 5, "abc");
        assert_eq!(pos, CursorPosition::new(3, 1));
    }

    #[test_case(CursorPosition::new(0, 7), 7 => CursorPosition::new(1, 0) ; "at margin")]
    #[test_case(CursorPosition::new(0, 6), 7 => CursorPosition::new(0, 6) ; "before margin")]
    #[test_case(CursorPosition::new(3, 0), 7 => CursorPosition::new(3, 0) ; "start of row")]
    fn test_wrap_cursor(pos: CursorPosition, columns: usize) -> CursorPosition {
        wrap_cursor(pos, columns)
    }
}
