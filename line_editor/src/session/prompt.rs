// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Command, CommandContext, CommandDecoder, CommandOutcome, CommandTree, ControlCharsDecorator,
            CsiSequence, DEBUG_LINE_EDITOR_SESSION, Decorator, Extensions, JobQueue,
            PinnedInputStream, PromptEnvironment, RawModeGuard, ReadlineError, Renderer,
            Terminal, TextBuffer, TextReader, default_command_tree, execute_command, ok,
            write_and_flush};
use std::{io::{self, Write},
          sync::Arc};

/// How a single [`prompt()`] call is set up.
#[derive(Debug, Clone)]
pub struct PromptOptions {
    /// Drawn in front of the text. May contain ANSI styling.
    pub prompt: String,
    /// Previous lines, oldest first. See [`crate::History::to_vec`].
    pub history: Vec<String>,
    pub command_tree: Arc<CommandTree>,
    pub decorator: Arc<dyn Decorator>,
    /// Drawn after the text.
    pub suffix: String,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            history: vec![],
            command_tree: default_command_tree(),
            decorator: Arc::new(ControlCharsDecorator),
            suffix: String::new(),
        }
    }
}

impl PromptOptions {
    /// Replace the key bindings with the trie built from `bindings`. Start from
    /// [`crate::DEFAULT_KEY_BINDINGS`] to keep the defaults and add to them.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::KeyBinding`] if a sequence is empty, or if one sequence is
    /// a strict prefix of another one.
    pub fn try_with_key_bindings<S: AsRef<str>>(
        mut self,
        bindings: &[(S, Command)],
    ) -> Result<Self, ReadlineError> {
        self.command_tree = Arc::new(CommandTree::try_from_bindings(bindings)?);
        ok!(self)
    }
}

/// How a prompt session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The user accepted the line.
    Commit(String),
    /// The user gave up on the line. The text typed so far is still reported.
    Abort(String),
    /// The input ended, or the user asked to quit (`^D` on an empty line).
    Cancel,
}

/// Read one line from the user, with editing, history and undo.
///
/// # Lifecycle
///
/// 1. Raw mode is enabled. A guard turns it back off however this function is left,
///    including a panic.
/// 2. Bracketed paste is enabled, and the first frame is drawn.
/// 3. Code points are read one at a time. At the start of a key sequence any
///    non control character is inserted as typed. Everything else goes through the
///    [`CommandDecoder`], and commands run once their sequence completes.
/// 4. On commit, abort or cancel the final frame is drawn with the cursor on a new line.
/// 5. Bracketed paste is disabled again, even if the session failed.
///
/// # Errors
///
/// Returns a [`ReadlineError`] if raw mode can't be toggled, or if reading the input,
/// querying the width, or writing the output fails. The end of the input is not an
/// error, it is [`PromptOutcome::Cancel`].
pub async fn prompt<W: Write, T: Terminal>(
    env: &mut PromptEnvironment<W, T>,
    options: PromptOptions,
) -> Result<PromptOutcome, ReadlineError> {
    let PromptEnvironment {
        input,
        output,
        terminal,
    } = env;
    let terminal = RawModeGuard::try_new(&*terminal)?;

    write_and_flush!(output, CsiSequence::enable_bracketed_paste());
    let result = run_session(input, output, &*terminal, options).await;
    let disable_paste_result = disable_bracketed_paste(output);

    let outcome = result?;
    disable_paste_result?;

    DEBUG_LINE_EDITOR_SESSION.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "prompt session ended", outcome = ?outcome);
    });

    ok!(outcome)
}

fn disable_bracketed_paste(output: &mut impl Write) -> io::Result<()> {
    write_and_flush!(output, CsiSequence::disable_bracketed_paste());
    ok!()
}

async fn run_session<W: Write, T: Terminal>(
    input: &mut PinnedInputStream<io::Result<u8>>,
    output: &mut W,
    terminal: &T,
    options: PromptOptions,
) -> Result<PromptOutcome, ReadlineError> {
    let PromptOptions {
        prompt,
        history,
        command_tree,
        decorator,
        suffix,
    } = options;

    let mut decoder = CommandDecoder::new(command_tree);
    let mut ctx = CommandContext {
        buffer: TextBuffer::new(prompt, history),
        renderer: Renderer::new(decorator),
        extensions: Extensions::default(),
        jobs: JobQueue::default(),
        suffix,
        reader: TextReader::new(input),
        output,
        terminal,
    };

    ctx.redraw()?;

    loop {
        let Some(c) = ctx.reader.read_code_point().await? else {
            ctx.finish()?;
            return ok!(PromptOutcome::Cancel);
        };

        // Fast path for ordinary typing.
        if decoder.is_empty() && !c.is_control() {
            ctx.insert_char(c);
            ctx.redraw()?;
            ctx.end_tick();
            continue;
        }

        let Some(command) = decoder.next(c) else {
            continue;
        };

        DEBUG_LINE_EDITOR_SESSION.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "execute command", command = %command);
        });

        let outcome = execute_command(&mut ctx, command).await?;
        ctx.end_tick();

        let outcome = match outcome {
            CommandOutcome::Continue => continue,
            CommandOutcome::Commit => PromptOutcome::Commit(ctx.buffer.text().to_owned()),
            CommandOutcome::Abort => PromptOutcome::Abort(ctx.buffer.text().to_owned()),
            CommandOutcome::Cancel => PromptOutcome::Cancel,
        };
        ctx.finish()?;
        return ok!(outcome);
    }
}
