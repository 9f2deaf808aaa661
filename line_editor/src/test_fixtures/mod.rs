// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stand-ins for stdin, stdout and the terminal, so that whole prompt sessions can run in
//! unit and integration tests.

// Attach sources.
pub mod input_stream_mock;
pub mod stdout_mock;
pub mod terminal_mock;

// Re-export.
pub use input_stream_mock::*;
pub use stdout_mock::*;
pub use terminal_mock::*;
