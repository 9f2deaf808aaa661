// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Command, CommandTree, CommandTreeEntry, DEBUG_LINE_EDITOR_DECODER, NodeId};
use std::sync::Arc;

/// Walks a shared [`CommandTree`] one code point at a time.
///
/// This is a greedy prefix matcher with no backtracking. When a code point has no entry
/// in the current node the decoder goes back to the root, and the code points that led
/// there are dropped. Terminal escape sequences are short and practically unambiguous,
/// so nothing is re-interpreted.
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    tree: Arc<CommandTree>,
    current: NodeId,
}

impl CommandDecoder {
    #[must_use]
    pub fn new(tree: Arc<CommandTree>) -> Self {
        Self {
            tree,
            current: NodeId::ROOT,
        }
    }

    /// `true` when no sequence is in progress. The session uses this to skip the trie
    /// entirely for ordinary typing.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.current == NodeId::ROOT }

    pub fn reset(&mut self) { self.current = NodeId::ROOT; }

    /// Feed one code point. Returns the command when a sequence completes, [`None`] while
    /// a sequence is still pending or after an unknown one is abandoned.
    pub fn next(&mut self, c: char) -> Option<Command> {
        match self.tree.get(self.current, c) {
            Some(CommandTreeEntry::Command(command)) => {
                self.current = NodeId::ROOT;
                Some(command)
            }
            Some(CommandTreeEntry::Subtree(child)) => {
                self.current = child;
                None
            }
            None => {
                DEBUG_LINE_EDITOR_DECODER.then(|| {
                    let was_pending = !self.is_empty();
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "unbound key sequence, back to root",
                        code_point = ?c,
                        was_pending = %was_pending,
                    );
                });
                self.current = NodeId::ROOT;
                None
            }
        }
    }

    #[must_use]
    pub fn tree(&self) -> &Arc<CommandTree> { &self.tree }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_command_tree;
    use pretty_assertions::assert_eq;

    fn feed(decoder: &mut CommandDecoder, input: &str) -> Vec<Option<Command>> {
        input.chars().map(|c| decoder.next(c)).collect()
    }

    #[test]
    fn test_escape_sequence_completes_and_resets() {
        let mut decoder = CommandDecoder::new(default_command_tree());
        assert!(decoder.is_empty());
        assert_eq!(feed(&mut decoder, "\x1b["), vec![None, None]);
        assert!(!decoder.is_empty());
        assert_eq!(decoder.next('A'), Some(Command::PreviousHistory));
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_unmapped_continuation_is_swallowed() {
        let mut decoder = CommandDecoder::new(default_command_tree());
        assert_eq!(feed(&mut decoder, "\x1b[Z"), vec![None, None, None]);
        assert!(decoder.is_empty());

        // The next sequence is decoded from scratch.
        assert_eq!(feed(&mut decoder, "\x1bOB"), vec![None, None, Some(Command::NextHistory)]);
    }

    #[test]
    fn test_single_char_commands() {
        let mut decoder = CommandDecoder::new(default_command_tree());
        assert_eq!(decoder.next('\r'), Some(Command::Commit));
        assert_eq!(decoder.next('\x03'), Some(Command::Abort));
        assert_eq!(decoder.next('\x7f'), Some(Command::DeleteBackward));
        assert_eq!(decoder.next('a'), None);
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_reset_abandons_pending_sequence() {
        let mut decoder = CommandDecoder::new(default_command_tree());
        decoder.next('\x1b');
        decoder.reset();
        assert!(decoder.is_empty());
        assert_eq!(decoder.next('b'), None);
    }

    #[test]
    fn test_decoders_share_one_tree() {
        let tree = default_command_tree();
        let mut first = CommandDecoder::new(Arc::clone(&tree));
        let mut second = CommandDecoder::new(Arc::clone(&tree));
        first.next('\x1b');
        assert_eq!(second.next('\x1b'), None);
        assert_eq!(first.next('f'), Some(Command::MoveForwardWord));
        assert_eq!(second.next('b'), Some(Command::MoveBackwardWord));
        assert!(Arc::ptr_eq(first.tree(), second.tree()));
    }
}
