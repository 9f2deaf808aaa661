// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The read → decode → apply → render loop of one prompt session, and the per session
//! state that commands work with.

// Attach sources.
pub mod builtin_commands;
pub mod command_context;
pub mod extensions;
pub mod job_queue;
pub mod prompt;

// Re-export.
pub use builtin_commands::*;
pub use command_context::*;
pub use extensions::*;
pub use job_queue::*;
pub use prompt::*;
