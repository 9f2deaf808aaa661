// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ExtensionKey, Extensions, JobKey, JobQueue, Renderer, Terminal, TextBuffer,
            TextReader, ok, write_and_flush};
use std::io::{self, Write};

/// Consecutive typed characters are undone together, this many at a time.
pub const INSERT_CHARS_PER_UNDO_STEP: usize = 20;

/// How many more typed characters go into the current undo step. `0` means the next one
/// starts a new step.
#[derive(Debug)]
pub struct CharsUntilSaveState;

impl ExtensionKey for CharsUntilSaveState {
    type Value = usize;
    fn default_value() -> usize { 0 }
}

/// Ends the current undo step once a tick passes without typing.
pub const END_INSERT_BATCH_JOB: JobKey = JobKey("end-insert-batch");

/// Everything a command can touch during one prompt session.
#[derive(Debug)]
pub struct CommandContext<'a, W: Write, T: Terminal> {
    pub buffer: TextBuffer,
    pub renderer: Renderer,
    pub extensions: Extensions,
    pub jobs: JobQueue,
    /// Drawn after the text, eg: a hint or a counter.
    pub suffix: String,
    pub reader: TextReader<'a>,
    pub output: &'a mut W,
    pub terminal: &'a T,
}

impl<W: Write, T: Terminal> CommandContext<'_, W, T> {
    /// Draw the current buffer if it changed since the last frame.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the width can't be queried or the output fails.
    pub fn redraw(&mut self) -> io::Result<()> {
        let columns = usize::from(self.terminal.columns()?);
        let frame = self.renderer.update(
            self.buffer.prompt(),
            &self.suffix,
            self.buffer.state(),
            columns,
        );
        if !frame.is_empty() {
            self.write_and_flush(&frame)?;
        }
        ok!()
    }

    /// Draw the final frame with the cursor after the content, and move to a new line.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if the width can't be queried or the output fails.
    pub fn finish(&mut self) -> io::Result<()> {
        let columns = usize::from(self.terminal.columns()?);
        let frame = self.renderer.finish(
            self.buffer.prompt(),
            &self.suffix,
            self.buffer.state(),
            columns,
        );
        self.write_and_flush(&frame)
    }

    fn write_and_flush(&mut self, text: &str) -> io::Result<()> {
        write_and_flush!(self.output, text);
        ok!()
    }

    /// Insert one typed (or quoted) character, batching undo steps.
    pub fn insert_char(&mut self, c: char) {
        if self.extensions.get::<CharsUntilSaveState>() == 0 {
            self.buffer.save_state();
            self.extensions
                .set::<CharsUntilSaveState>(INSERT_CHARS_PER_UNDO_STEP);
        }

        let mut encoded = [0_u8; 4];
        self.buffer.insert_text(c.encode_utf8(&mut encoded));

        self.extensions
            .update::<CharsUntilSaveState>(|it| *it = it.saturating_sub(1));
        self.jobs.schedule(END_INSERT_BATCH_JOB, |extensions: &mut Extensions| {
            extensions.set::<CharsUntilSaveState>(0);
        });
    }

    /// Call once per completed dispatch.
    pub fn end_tick(&mut self) { self.jobs.run_tick(&mut self.extensions); }
}
