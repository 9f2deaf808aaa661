// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_line_editor::{Command, default_command_tree, escape_control_chars};
use strum::IntoEnumIterator;

/// Prints every key sequence of the default bindings, grouped by command.
///
/// ```text
/// ┌────────────────────────────────────────┐
/// │ > cargo run --example show_keybinds     │
/// └────────────────────────────────────────┘
/// ```
fn main() {
    let tree = default_command_tree();
    let bindings = tree.bindings();

    for command in Command::iter() {
        let sequences = bindings
            .iter()
            .filter(|(_, it)| *it == command)
            .map(|(sequence, _)| escape_control_chars(sequence, false))
            .collect::<Vec<_>>();
        println!("{:<24} {}", command.to_string(), sequences.join("  "));
    }
}
