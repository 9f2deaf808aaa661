// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BRACKETED_PASTE_END, Command, CommandContext, CsiSequence, EraseDisplayMode,
            ReadlineError, Terminal, TextBuffer, ok};
use std::io::Write;

/// What the prompt loop does after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Commit,
    Abort,
    Cancel,
}

/// Run one decoded command against the session.
///
/// Every command that removes text is one undo step. Moving the cursor is not undoable.
///
/// # Errors
///
/// Returns [`ReadlineError::IO`] if reading more input (quoted insert, paste) or drawing
/// the new frame fails.
pub async fn execute_command<W: Write, T: Terminal>(
    ctx: &mut CommandContext<'_, W, T>,
    command: Command,
) -> Result<CommandOutcome, ReadlineError> {
    match command {
        Command::Commit => return ok!(CommandOutcome::Commit),
        Command::Abort => return ok!(CommandOutcome::Abort),
        Command::DeleteBackward => ctx.buffer.with_undo(TextBuffer::delete_backward),
        Command::DeleteForward => ctx.buffer.with_undo(TextBuffer::delete_forward),
        Command::DeleteForwardOrCancel => {
            if ctx.buffer.text().is_empty() {
                return ok!(CommandOutcome::Cancel);
            }
            ctx.buffer.with_undo(TextBuffer::delete_forward);
        }
        Command::CutToStart => ctx.buffer.with_undo(TextBuffer::cut_to_start),
        Command::CutToEnd => ctx.buffer.with_undo(TextBuffer::cut_to_end),
        Command::CutPreviousWord => ctx.buffer.with_undo(TextBuffer::cut_previous_word),
        Command::CutNextWord => ctx.buffer.with_undo(TextBuffer::cut_next_word),
        Command::MoveToStart => ctx.buffer.move_to_start(),
        Command::MoveToEnd => ctx.buffer.move_to_end(),
        Command::MoveBackward => ctx.buffer.move_backward(),
        Command::MoveForward => ctx.buffer.move_forward(),
        Command::MoveBackwardWord => ctx.buffer.move_backward_word(),
        Command::MoveForwardWord => ctx.buffer.move_forward_word(),
        Command::ClearScreen => ctx
            .renderer
            .set_reset_sequence(CsiSequence::CursorHome.to_string()),
        Command::ClearDisplay => ctx.renderer.set_reset_sequence(format!(
            "{}{}",
            CsiSequence::CursorHome,
            CsiSequence::EraseDisplay(EraseDisplayMode::Scrollback)
        )),
        Command::NextHistory => ctx.buffer.next_history(),
        Command::PreviousHistory => ctx.buffer.previous_history(),
        Command::Undo => ctx.buffer.restore_state(),
        Command::RevertLine => ctx.buffer.reset_state(),
        Command::QuotedInsert => {
            let Some(c) = ctx.reader.read_code_point().await? else {
                return ok!(CommandOutcome::Cancel);
            };
            ctx.insert_char(c);
        }
        Command::BracketedPasteBegin => {
            let Some(text) = read_bracketed_paste(ctx).await? else {
                return ok!(CommandOutcome::Cancel);
            };
            ctx.buffer.save_state();
            ctx.buffer.insert_text(&text);
        }
    }

    ctx.redraw()?;
    ok!(CommandOutcome::Continue)
}

/// Everything up to (not including) the end of paste marker, or [`None`] if the input
/// ends first.
async fn read_bracketed_paste<W: Write, T: Terminal>(
    ctx: &mut CommandContext<'_, W, T>,
) -> Result<Option<String>, ReadlineError> {
    let mut acc = String::new();
    loop {
        let Some(c) = ctx.reader.read_code_point().await? else {
            return ok!(None);
        };
        acc.push(c);
        if acc.ends_with(BRACKETED_PASTE_END) {
            acc.truncate(acc.len() - BRACKETED_PASTE_END.len());
            return ok!(Some(acc));
        }
    }
}
