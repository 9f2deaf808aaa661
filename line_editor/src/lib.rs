// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words readline

//! # r3bl_line_editor
//!
//! An interactive line editor for terminals in raw mode. Give it an async stream of input
//! bytes, a [`std::io::Write`] for output, and a [`Terminal`] to toggle raw mode and ask
//! for the width, and [`prompt()`] returns the line the user typed.
//!
//! ```no_run
//! use r3bl_line_editor::{PromptEnvironment, PromptOptions, PromptOutcome, prompt};
//!
//! # async fn run() -> miette::Result<()> {
//! let mut env = PromptEnvironment::stdio();
//! match prompt(&mut env, PromptOptions::default()).await? {
//!     PromptOutcome::Commit(line) => println!("you typed: {line}"),
//!     PromptOutcome::Abort(_) | PromptOutcome::Cancel => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # How the pieces fit
//!
//! - [`boundary`]: grapheme cluster and word boundaries in UTF-8 text. Every offset in
//!   this crate is a byte offset that sits on a cluster boundary.
//! - [`buffer`]: the edited text and cursor ([`BufferState`]), history browsing with a
//!   stashed draft, and an undo stack of snapshots ([`TextBuffer`]).
//! - [`command`]: the editing [`Command`]s, the immutable trie of key bindings
//!   ([`CommandTree`]), and the [`CommandDecoder`] that walks it one code point at a time.
//! - [`render`]: cursor geometry with line wrapping and wide characters, and the
//!   [`Renderer`] that redraws the prompt and text from wherever the last frame left the
//!   cursor.
//! - [`io`]: the input byte stream, UTF-8 decoding, and the [`Terminal`] seam.
//! - [`session`]: the read, decode, apply, render loop that [`prompt()`] runs.
//! - [`log`]: optional `tracing` setup. The `DEBUG_LINE_EDITOR_*` consts below control
//!   what each part logs.
//! - [`test_fixtures`]: mocks for stdout, the input stream, and the terminal.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod boundary;
pub mod buffer;
pub mod command;
pub mod common;
pub mod io;
pub mod log;
pub mod render;
pub mod session;
pub mod test_fixtures;

// Re-export.
pub use boundary::*;
pub use buffer::*;
pub use command::*;
pub use common::*;
pub use io::*;
pub use log::*;
pub use render::*;
pub use session::*;
pub use test_fixtures::*;

/// Log the start and end of every prompt session, and each command that runs.
pub const DEBUG_LINE_EDITOR_SESSION: bool = true;
/// Log history navigation.
pub const DEBUG_LINE_EDITOR_BUFFER: bool = true;
/// Log abandoned key sequences. Noisy when exploring unbound keys.
pub const DEBUG_LINE_EDITOR_DECODER: bool = false;
/// Log the cursor geometry of every frame. Very noisy.
pub const DEBUG_LINE_EDITOR_RENDER: bool = false;
