// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CrosstermTerminal, PinnedInputStream, Terminal, stdin_byte_stream};
use std::{fmt::{Debug, Formatter},
          io::{self, Stdout, Write}};

/// The input, output and terminal a prompt session runs against. Real programs use
/// [`PromptEnvironment::stdio`], tests inject a byte stream, a
/// [`crate::StdoutMock`] and a [`crate::TerminalMock`].
///
/// Keep one of these around for the life of the program and pass it to every
/// [`crate::prompt()`] call.
pub struct PromptEnvironment<W: Write, T: Terminal> {
    pub input: PinnedInputStream<io::Result<u8>>,
    pub output: W,
    pub terminal: T,
}

impl<W: Write, T: Terminal> PromptEnvironment<W, T> {
    pub fn new(input: PinnedInputStream<io::Result<u8>>, output: W, terminal: T) -> Self {
        Self {
            input,
            output,
            terminal,
        }
    }
}

impl PromptEnvironment<Stdout, CrosstermTerminal> {
    /// Stdin, stdout and the controlling terminal.
    #[must_use]
    pub fn stdio() -> Self { Self::new(stdin_byte_stream(), io::stdout(), CrosstermTerminal) }
}

impl<W: Write, T: Terminal> Debug for PromptEnvironment<W, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptEnvironment").finish_non_exhaustive()
    }
}
