// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Command, KeyBindingError};
use smallvec::SmallVec;

/// Index of a node in the [`CommandTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Every tree has a root, and it is always the first node in the arena.
    pub const ROOT: NodeId = NodeId(0);
}

/// What a single code point maps to from a given node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTreeEntry {
    /// A complete key sequence.
    Command(Command),
    /// A prefix of one or more longer key sequences.
    Subtree(NodeId),
}

/// Most nodes have a handful of children (`ESC [` has the most). They are kept sorted by
/// code point so that lookup is a binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CommandTreeNode {
    children: SmallVec<[(char, CommandTreeEntry); 8]>,
}

impl CommandTreeNode {
    fn get(&self, c: char) -> Option<CommandTreeEntry> {
        self.children
            .binary_search_by_key(&c, |(key, _)| *key)
            .ok()
            .map(|index| self.children[index].1)
    }

    fn set(&mut self, c: char, entry: CommandTreeEntry) {
        match self.children.binary_search_by_key(&c, |(key, _)| *key) {
            Ok(index) => self.children[index].1 = entry,
            Err(index) => self.children.insert(index, (c, entry)),
        }
    }
}

/// Immutable prefix trie of key bindings, stored as an arena of nodes.
///
/// Build it with [`CommandTree::try_from_bindings`]. There is no way to change it after
/// that, which is what makes sharing one tree between any number of
/// [`crate::CommandDecoder`]s (and threads) safe without locks.
///
/// ```rust
/// use r3bl_line_editor::{Command, CommandTree, CommandTreeEntry, NodeId};
///
/// let tree = CommandTree::try_from_bindings(&[
///     ("\r", Command::Commit),
///     ("\x1b[A", Command::PreviousHistory),
/// ])
/// .unwrap();
/// assert_eq!(tree.get(NodeId::ROOT, '\r'), Some(CommandTreeEntry::Command(Command::Commit)));
/// assert!(matches!(tree.get(NodeId::ROOT, '\x1b'), Some(CommandTreeEntry::Subtree(_))));
/// assert_eq!(tree.get(NodeId::ROOT, 'x'), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTree {
    nodes: Vec<CommandTreeNode>,
}

impl CommandTree {
    /// Merge a flat binding table into a trie, sharing common prefixes.
    ///
    /// Binding the same sequence twice keeps the last command.
    ///
    /// # Errors
    ///
    /// Returns [`KeyBindingError`] if a sequence is empty, or if one sequence is a strict
    /// prefix of another one (the decoder is greedy, so the longer one could never
    /// fire).
    pub fn try_from_bindings<S: AsRef<str>>(
        bindings: &[(S, Command)],
    ) -> Result<Self, KeyBindingError> {
        let mut tree = CommandTree {
            nodes: vec![CommandTreeNode::default()],
        };
        for (sequence, command) in bindings {
            tree.insert(sequence.as_ref(), *command)?;
        }
        Ok(tree)
    }

    fn insert(&mut self, sequence: &str, command: Command) -> Result<(), KeyBindingError> {
        if sequence.is_empty() {
            return Err(KeyBindingError::EmptySequence { command });
        }

        let mut node = NodeId::ROOT;
        let mut chars = sequence.char_indices().peekable();
        while let Some((index, c)) = chars.next() {
            let is_last = chars.peek().is_none();
            match (self.get(node, c), is_last) {
                (None | Some(CommandTreeEntry::Command(_)), true) => {
                    self.nodes[node.0].set(c, CommandTreeEntry::Command(command));
                }
                (None, false) => {
                    let child = NodeId(self.nodes.len());
                    self.nodes.push(CommandTreeNode::default());
                    self.nodes[node.0].set(c, CommandTreeEntry::Subtree(child));
                    node = child;
                }
                (Some(CommandTreeEntry::Subtree(child)), false) => node = child,
                (Some(CommandTreeEntry::Command(existing)), false) => {
                    return Err(KeyBindingError::ExtendsBoundSequence {
                        sequence: sequence.to_owned(),
                        prefix: sequence[..index + c.len_utf8()].to_owned(),
                        existing,
                    });
                }
                (Some(CommandTreeEntry::Subtree(_)), true) => {
                    return Err(KeyBindingError::PrefixOfLongerSequence {
                        sequence: sequence.to_owned(),
                        command,
                    });
                }
            }
        }

        Ok(())
    }

    /// Look up `c` among the children of `node`.
    #[must_use]
    pub fn get(&self, node: NodeId, c: char) -> Option<CommandTreeEntry> {
        self.nodes.get(node.0).and_then(|it| it.get(c))
    }

    /// All `(sequence, command)` pairs, ordered by sequence.
    #[must_use]
    pub fn bindings(&self) -> Vec<(String, Command)> {
        let mut acc = vec![];
        self.collect_bindings(NodeId::ROOT, &mut String::new(), &mut acc);
        acc
    }

    fn collect_bindings(&self, node: NodeId, prefix: &mut String, acc: &mut Vec<(String, Command)>) {
        for (c, entry) in &self.nodes[node.0].children {
            prefix.push(*c);
            match entry {
                CommandTreeEntry::Command(command) => acc.push((prefix.clone(), *command)),
                CommandTreeEntry::Subtree(child) => self.collect_bindings(*child, prefix, acc),
            }
            prefix.pop();
        }
    }

    /// Number of nodes in the arena, root included.
    #[must_use]
    pub fn node_count(&self) -> usize { self.nodes.len() }
}
