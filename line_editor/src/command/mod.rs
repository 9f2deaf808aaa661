// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns the incoming stream of code points into discrete [`Command`]s.
//!
//! A flat table of `(key sequence, command)` pairs is merged once into an immutable
//! prefix trie ([`CommandTree`]). A [`CommandDecoder`] walks that trie one code point at
//! a time. Many decoders can share one tree through an [`std::sync::Arc`] since nothing
//! writes to the tree after it is built.

// Attach sources.
pub mod command_decoder;
pub mod command_tree;
pub mod command_type;
pub mod default_key_bindings;

// Re-export.
pub use command_decoder::*;
pub use command_tree::*;
pub use command_type::*;
pub use default_key_bindings::*;
