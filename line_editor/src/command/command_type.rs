// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Every editing action that a key sequence can be bound to. The [`Display`] and
/// [`std::str::FromStr`] forms are the kebab case names, eg: `cut-previous-word`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Command {
    /// Accept the line.
    Commit,
    /// Give up on the line (the text so far is still reported).
    Abort,
    DeleteBackward,
    DeleteForward,
    /// Same as [`Command::DeleteForward`], but ends the session with a cancel outcome
    /// when the line is empty.
    DeleteForwardOrCancel,
    CutToStart,
    CutToEnd,
    CutPreviousWord,
    CutNextWord,
    MoveToStart,
    MoveToEnd,
    MoveBackward,
    MoveForward,
    MoveBackwardWord,
    MoveForwardWord,
    /// Move the terminal cursor home and redraw.
    ClearScreen,
    /// Like [`Command::ClearScreen`], also wiping the scrollback.
    ClearDisplay,
    NextHistory,
    PreviousHistory,
    Undo,
    /// Roll back every undo step of the current line at once.
    RevertLine,
    /// Insert the next code point literally, even if it is a control character.
    QuotedInsert,
    /// Start of a bracketed paste. Everything up to the end marker is inserted as text.
    BracketedPasteBegin,
}

impl Command {
    /// Commands that end the prompt session.
    #[must_use]
    pub fn is_terminal(self) -> bool { matches!(self, Command::Commit | Command::Abort) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_are_kebab_case() {
        assert_eq!(Command::CutPreviousWord.to_string(), "cut-previous-word");
        assert_eq!(Command::BracketedPasteBegin.as_ref(), "bracketed-paste-begin");
        assert_eq!(Command::from_str("delete-forward-or-cancel"), Ok(Command::DeleteForwardOrCancel));
        assert!(Command::from_str("self-destruct").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for command in Command::iter() {
            assert_eq!(Command::from_str(&command.to_string()), Ok(command));
        }
        assert_eq!(Command::iter().count(), 23);
        assert_eq!(Command::iter().filter(|it| it.is_terminal()).count(), 2);
    }
}
