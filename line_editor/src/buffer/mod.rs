// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod buffer_state;
pub mod history;
pub mod text_buffer;

// Re-export.
pub use buffer_state::*;
pub use history::*;
pub use text_buffer::*;
