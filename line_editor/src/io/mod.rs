// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything the prompt session needs from the outside world, behind seams that tests
//! can swap out: an async byte stream for input, a [`std::io::Write`] for output, and a
//! [`Terminal`] for raw mode and the width.

// Attach sources.
pub mod input_stream;
pub mod prompt_environment;
pub mod terminal;
pub mod text_reader;

// Re-export.
pub use input_stream::*;
pub use prompt_environment::*;
pub use terminal::*;
pub use text_reader::*;
