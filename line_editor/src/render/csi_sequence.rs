// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The handful of control sequences the renderer and the prompt session emit.

use std::fmt::{Display, Formatter, Result};

pub const CSI_START: &str = "\x1b[";
pub const CSI_PRIVATE_MODE_PREFIX: char = '?';
pub const CHA_CURSOR_COLUMN: char = 'G';
pub const CPL_CURSOR_PREV_LINE: char = 'F';
pub const CUP_CURSOR_POSITION: char = 'H';
pub const ED_ERASE_DISPLAY: char = 'J';
pub const EL_ERASE_LINE: char = 'K';
pub const SGR_SET_GRAPHICS: char = 'm';
pub const SM_SET_PRIVATE_MODE: char = 'h';
pub const RM_RESET_PRIVATE_MODE: char = 'l';

/// Private mode number of bracketed paste.
pub const BRACKETED_PASTE_MODE: u16 = 2004;
/// Sent by the terminal in front of pasted text, when bracketed paste is on.
pub const BRACKETED_PASTE_START: &str = "\x1b[200~";
/// Sent by the terminal after pasted text, when bracketed paste is on.
pub const BRACKETED_PASTE_END: &str = "\x1b[201~";

/// Line break for a terminal in raw mode (no output post processing).
pub const RAW_MODE_LINE_BREAK: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseDisplayMode {
    /// `ESC [ J`
    FromCursorToEnd,
    /// `ESC [ 3 J`, the scrollback buffer.
    Scrollback,
}

/// Builder for CSI (Control Sequence Introducer) sequences. Parameters that are equal to
/// the default value of the sequence are left out, eg: `CursorPrevLine(1)` is
/// `ESC [ F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G, `n` is 1 based.
    CursorHorizontalAbsolute(usize),
    /// Cursor Previous Line (CPL) - ESC [ n F
    CursorPrevLine(usize),
    /// Cursor Position (CUP) to the top left corner - ESC [ H
    CursorHome,
    /// Erase Display (ED) - ESC [ n J
    EraseDisplay(EraseDisplayMode),
    /// Erase Line (EL) from the cursor to the end of the line - ESC [ K
    EraseLineToEnd,
    /// Select Graphic Rendition (SGR) reverse video - ESC [ 7 m
    SgrReverse,
    /// Select Graphic Rendition (SGR) reset - ESC [ m
    SgrReset,
    /// Enable Private Mode - ESC [ ? n h
    EnablePrivateMode(u16),
    /// Disable Private Mode - ESC [ ? n l
    DisablePrivateMode(u16),
}

impl CsiSequence {
    #[must_use]
    pub fn enable_bracketed_paste() -> Self { Self::EnablePrivateMode(BRACKETED_PASTE_MODE) }

    #[must_use]
    pub fn disable_bracketed_paste() -> Self { Self::DisablePrivateMode(BRACKETED_PASTE_MODE) }
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorHorizontalAbsolute(n) => {
                write_param_if_not(f, *n, 1)?;
                write!(f, "{CHA_CURSOR_COLUMN}")
            }
            CsiSequence::CursorPrevLine(n) => {
                write_param_if_not(f, *n, 1)?;
                write!(f, "{CPL_CURSOR_PREV_LINE}")
            }
            CsiSequence::CursorHome => write!(f, "{CUP_CURSOR_POSITION}"),
            CsiSequence::EraseDisplay(EraseDisplayMode::FromCursorToEnd) => {
                write!(f, "{ED_ERASE_DISPLAY}")
            }
            CsiSequence::EraseDisplay(EraseDisplayMode::Scrollback) => {
                write!(f, "3{ED_ERASE_DISPLAY}")
            }
            CsiSequence::EraseLineToEnd => write!(f, "{EL_ERASE_LINE}"),
            CsiSequence::SgrReverse => write!(f, "7{SGR_SET_GRAPHICS}"),
            CsiSequence::SgrReset => write!(f, "{SGR_SET_GRAPHICS}"),
            CsiSequence::EnablePrivateMode(mode) => {
                write!(f, "{CSI_PRIVATE_MODE_PREFIX}{mode}{SM_SET_PRIVATE_MODE}")
            }
            CsiSequence::DisablePrivateMode(mode) => {
                write!(f, "{CSI_PRIVATE_MODE_PREFIX}{mode}{RM_RESET_PRIVATE_MODE}")
            }
        }
    }
}

fn write_param_if_not(f: &mut Formatter<'_>, value: usize, default: usize) -> Result {
    if value == default {
        Ok(())
    } else {
        write!(f, "{value}")
    }
}
