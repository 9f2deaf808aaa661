// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unicode segmentation helpers. Every cursor movement or deletion in
//! [`crate::TextBuffer`] goes through these so that the cursor never lands inside a
//! multi code point grapheme cluster (`"e\u{301}"`, `"👍🏽"`, `"\r\n"` …).
//!
//! All offsets are UTF-8 byte offsets. All functions are total: any offset, including
//! ones past the end of the text or ones that fall inside a `char`, produces a sensible
//! answer.

// Attach sources.
pub mod grapheme_boundary;
pub mod word_boundary;

// Re-export.
pub use grapheme_boundary::*;
pub use word_boundary::*;
