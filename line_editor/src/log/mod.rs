// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing`] setup for programs that embed the line editor.
//!
//! The editor owns the terminal while a prompt is active, so logging to the display is
//! only useful before or after a session. Log to a file (the default) to see the
//! `DEBUG_LINE_EDITOR_*` output while typing.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
