// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CsiSequence;
use std::fmt::{Debug, Write};

/// Turns a slice of the edited text into what is actually written to the terminal.
///
/// The renderer calls this twice per frame, once for the text before the cursor and
/// once for the text after it, so `start` and `end` are always cluster boundaries of
/// `text`. Implementations must never let raw control characters (other than `\n`)
/// through, since the terminal would act on them.
pub trait Decorator: Debug + Send + Sync {
    fn decorate(&self, text: &str, start: usize, end: usize) -> String;
}

/// Shows control characters in reverse video instead of sending them to the terminal:
/// `^A` for `U+0001`, `^?` for `U+007F`, and `\205` (octal) for C1 controls like
/// `U+0085`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlCharsDecorator;

impl Decorator for ControlCharsDecorator {
    fn decorate(&self, text: &str, start: usize, end: usize) -> String {
        let end = end.min(text.len());
        let start = start.min(end);
        escape_control_chars(text.get(start..end).unwrap_or_default(), true)
    }
}

fn is_escaped(c: char) -> bool { c.is_control() && c != '\n' }

fn push_escaped(acc: &mut String, c: char) {
    let code_point = u32::from(c);
    if code_point < 0x80 {
        acc.push('^');
        acc.push(char::from(u8::try_from(code_point ^ 0x40).unwrap_or(b'?')));
    } else {
        // Writing to a String never fails.
        let _unused = write!(acc, "\\{code_point:o}");
    }
}

/// Replaces every control character except `\n` with caret or octal notation. When
/// `styled` is set, each run of escaped characters is wrapped in reverse video.
#[must_use]
pub fn escape_control_chars(text: &str, styled: bool) -> String {
    if !text.contains(is_escaped) {
        return text.to_owned();
    }

    let mut acc = String::with_capacity(text.len() * 2);
    let mut in_run = false;
    for c in text.chars() {
        match (is_escaped(c), in_run) {
            (true, false) => {
                if styled {
                    let _unused = write!(acc, "{}", CsiSequence::SgrReverse);
                }
                push_escaped(&mut acc, c);
                in_run = true;
            }
            (true, true) => push_escaped(&mut acc, c),
            (false, true) => {
                if styled {
                    let _unused = write!(acc, "{}", CsiSequence::SgrReset);
                }
                acc.push(c);
                in_run = false;
            }
            (false, false) => acc.push(c),
        }
    }
    if in_run && styled {
        let _unused = write!(acc, "{}", CsiSequence::SgrReset);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("hello", false => "hello" ; "nothing to escape")]
    #[test_case("a\nb", true => "a\nb" ; "newline is kept")]
    #[test_case("\x01", false => "^A" ; "caret notation")]
    #[test_case("\x1b\x7f", false => "^[^?" ; "escape and delete")]
    #[test_case("\u{85}", false => "\\205" ; "octal for c1 controls")]
    #[test_case("\x01", true => "\x1b[7m^A\x1b[m" ; "styled")]
    #[test_case("a\x01\x02b\tc", true => "a\x1b[7m^A^B\x1b[mb\x1b[7m^I\x1b[mc" ; "one style per run")]
    fn test_escape_control_chars(text: &str, styled: bool) -> String {
        escape_control_chars(text, styled)
    }

    #[test]
    fn test_decorate_slices() {
        let decorator = ControlCharsDecorator;
        let text = "ab\x03cd";
        assert_eq!(decorator.decorate(text, 0, 2), "ab");
        assert_eq!(decorator.decorate(text, 2, 5), "\x1b[7m^C\x1b[mcd");
        assert_eq!(decorator.decorate(text, 4, 99), "d");
    }
}
