// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Command, CommandTree};
use std::sync::{Arc, LazyLock};

/// The emacs style bindings used when [`crate::PromptOptions`] doesn't say otherwise.
/// Cursor keys are listed with both the `ESC [` (normal) and `ESC O` (application mode)
/// prefixes.
#[rustfmt::skip]
pub const DEFAULT_KEY_BINDINGS: &[(&str, Command)] = &[
    ("\n" /* ^J */, Command::Commit),
    ("\r" /* ^M */, Command::Commit),
    ("\x03" /* ^C */, Command::Abort),
    ("\x08" /* ^H */, Command::DeleteBackward),
    ("\x7f" /* ^? */, Command::DeleteBackward),
    ("\x04" /* ^D */, Command::DeleteForwardOrCancel),
    ("\x15" /* ^U */, Command::CutToStart),
    ("\x0b" /* ^K */, Command::CutToEnd),
    ("\x17" /* ^W */, Command::CutPreviousWord),
    ("\x01" /* ^A */, Command::MoveToStart),
    ("\x05" /* ^E */, Command::MoveToEnd),
    ("\x02" /* ^B */, Command::MoveBackward),
    ("\x06" /* ^F */, Command::MoveForward),
    ("\x0c" /* ^L */, Command::ClearScreen),
    ("\x0e" /* ^N */, Command::NextHistory),
    ("\x10" /* ^P */, Command::PreviousHistory),
    ("\x11" /* ^Q */, Command::QuotedInsert),
    ("\x16" /* ^V */, Command::QuotedInsert),
    ("\x1f" /* ^_ */, Command::Undo),
    ("\x18\x15" /* ^X ^U */, Command::Undo),
    ("\x18\x7f" /* ^X ^? */, Command::CutToStart),
    // Meta.
    ("\x1b\x08" /* M-^H */, Command::CutPreviousWord),
    ("\x1b\x7f" /* M-^? */, Command::CutPreviousWord),
    ("\x1bd", Command::CutNextWord),
    ("\x1bD", Command::CutNextWord),
    ("\x1bb", Command::MoveBackwardWord),
    ("\x1bB", Command::MoveBackwardWord),
    ("\x1bf", Command::MoveForwardWord),
    ("\x1bF", Command::MoveForwardWord),
    ("\x1b\x0c" /* M-^L */, Command::ClearDisplay),
    ("\x1br", Command::RevertLine),
    // CSI.
    ("\x1b[A", Command::PreviousHistory),
    ("\x1b[B", Command::NextHistory),
    ("\x1b[C", Command::MoveForward),
    ("\x1b[D", Command::MoveBackward),
    ("\x1b[H", Command::MoveToStart),
    ("\x1b[F", Command::MoveToEnd),
    ("\x1b[1;3C" /* M-Right */, Command::MoveForwardWord),
    ("\x1b[1;3D" /* M-Left */, Command::MoveBackwardWord),
    ("\x1b[1;5C" /* C-Right */, Command::MoveForwardWord),
    ("\x1b[1;5D" /* C-Left */, Command::MoveBackwardWord),
    ("\x1b[1~" /* Home */, Command::MoveToStart),
    ("\x1b[7~" /* Home */, Command::MoveToStart),
    ("\x1b[4~" /* End */, Command::MoveToEnd),
    ("\x1b[8~" /* End */, Command::MoveToEnd),
    ("\x1b[3~" /* Delete */, Command::DeleteForward),
    ("\x1b[3;5~" /* C-Delete */, Command::CutNextWord),
    ("\x1b[200~", Command::BracketedPasteBegin),
    // SS3, application cursor keys.
    ("\x1bOA", Command::PreviousHistory),
    ("\x1bOB", Command::NextHistory),
    ("\x1bOC", Command::MoveForward),
    ("\x1bOD", Command::MoveBackward),
    ("\x1bOH", Command::MoveToStart),
    ("\x1bOF", Command::MoveToEnd),
];

static DEFAULT_COMMAND_TREE: LazyLock<Arc<CommandTree>> = LazyLock::new(|| {
    let tree = CommandTree::try_from_bindings(DEFAULT_KEY_BINDINGS)
        .expect("default key bindings have no prefix conflicts");
    Arc::new(tree)
});

/// [`DEFAULT_KEY_BINDINGS`] as a trie. It is built on first use and shared by every
/// caller afterwards.
///
/// # Panics
///
/// Only if [`DEFAULT_KEY_BINDINGS`] has a prefix conflict, which its tests rule out.
#[must_use]
pub fn default_command_tree() -> Arc<CommandTree> { Arc::clone(&DEFAULT_COMMAND_TREE) }
