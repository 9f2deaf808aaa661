// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Command;
use std::io;
use thiserror::Error;

/// Error returned from [`prompt()`](crate::prompt). These are always fatal for the
/// session that produced them. Everything the user can do at the keyboard (unknown escape
/// sequences, undo with nothing to undo, moving past the end of the line) is handled
/// inside the session and never surfaces here.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ReadlineError {
    /// Reading from the input stream, writing to the output, or toggling raw mode failed.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_editor::io))]
    IO(#[from] io::Error),

    /// A custom key binding table could not be turned into a [`crate::CommandTree`].
    #[error(transparent)]
    #[diagnostic(transparent)]
    KeyBinding(#[from] KeyBindingError),
}

/// Problems found while merging a flat key binding table into a [`crate::CommandTree`].
///
/// The decoder is a greedy prefix matcher, so a binding that is a strict prefix of
/// another one would make the longer binding unreachable. Both directions of that
/// conflict are reported.
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
pub enum KeyBindingError {
    #[error("key binding for `{command}` has an empty sequence")]
    #[diagnostic(
        code(r3bl_line_editor::key_binding::empty_sequence),
        help("Every binding needs at least one character.")
    )]
    EmptySequence { command: Command },

    #[error(
        "key sequence {sequence:?} extends {prefix:?}, which is already bound to `{existing}`"
    )]
    #[diagnostic(
        code(r3bl_line_editor::key_binding::extends_bound_sequence),
        help("Remove one of the two bindings, the longer one can never be reached.")
    )]
    ExtendsBoundSequence {
        sequence: String,
        prefix: String,
        existing: Command,
    },

    #[error("key sequence {sequence:?} for `{command}` is a prefix of a longer binding")]
    #[diagnostic(
        code(r3bl_line_editor::key_binding::prefix_of_longer_sequence),
        help("Remove one of the two bindings, the longer one can never be reached.")
    )]
    PrefixOfLongerSequence { sequence: String, command: Command },
}
