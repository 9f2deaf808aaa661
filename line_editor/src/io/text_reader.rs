// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::PinnedInputStream;
use futures_util::StreamExt;
use smallvec::SmallVec;
use std::{char::REPLACEMENT_CHARACTER, collections::VecDeque, io};

/// Incremental UTF-8 decoder on top of a byte stream. Terminals send multi byte
/// characters and escape sequences as separate reads, so decoding can't assume that a
/// read holds whole characters.
///
/// Malformed input never fails: each maximal invalid subsequence decodes to
/// [`REPLACEMENT_CHARACTER`] and decoding picks up again at the next byte. A sequence
/// cut short by the end of the stream also produces one [`REPLACEMENT_CHARACTER`], and
/// then [`None`].
pub struct TextReader<'a> {
    input: &'a mut PinnedInputStream<io::Result<u8>>,
    /// Bytes of the character being decoded.
    pending: SmallVec<[u8; 4]>,
    /// Bytes that followed an invalid sequence and have to be decoded again.
    replay: VecDeque<u8>,
}

impl std::fmt::Debug for TextReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextReader")
            .field("pending", &self.pending)
            .field("replay", &self.replay)
            .finish_non_exhaustive()
    }
}

impl<'a> TextReader<'a> {
    pub fn new(input: &'a mut PinnedInputStream<io::Result<u8>>) -> Self {
        Self {
            input,
            pending: SmallVec::new(),
            replay: VecDeque::new(),
        }
    }

    /// The next code point, or [`None`] at the end of the stream.
    ///
    /// # Errors
    ///
    /// Returns the first [`io::Error`] yielded by the underlying stream.
    pub async fn read_code_point(&mut self) -> io::Result<Option<char>> {
        loop {
            let Some(byte) = self.next_byte().await? else {
                if self.pending.is_empty() {
                    return Ok(None);
                }
                self.pending.clear();
                return Ok(Some(REPLACEMENT_CHARACTER));
            };

            self.pending.push(byte);
            match std::str::from_utf8(&self.pending) {
                Ok(decoded) => {
                    let maybe_char = decoded.chars().next();
                    self.pending.clear();
                    return Ok(maybe_char);
                }
                // Incomplete, keep reading.
                Err(error) if error.error_len().is_none() => {}
                Err(error) => {
                    let invalid_len = error.error_len().unwrap_or(self.pending.len());
                    for byte in self.pending.drain(invalid_len..).rev() {
                        self.replay.push_front(byte);
                    }
                    self.pending.clear();
                    return Ok(Some(REPLACEMENT_CHARACTER));
                }
            }
        }
    }

    async fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.replay.pop_front() {
            return Ok(Some(byte));
        }
        self.input.next().await.transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_input_stream;
    use pretty_assertions::assert_eq;

    async fn decode_all(bytes: &[u8]) -> Vec<char> {
        let mut input = gen_input_stream(bytes.iter().copied().map(Ok).collect());
        let mut reader = TextReader::new(&mut input);
        let mut acc = vec![];
        while let Some(c) = reader.read_code_point().await.unwrap() {
            acc.push(c);
        }
        acc
    }

    #[tokio::test]
    async fn test_ascii_and_multi_byte() {
        let chars = decode_all("a日👍🏽\x1b[A".as_bytes()).await;
        assert_eq!(chars, "a日👍🏽\x1b[A".chars().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_invalid_bytes_become_replacement_chars() {
        // Lone continuation byte, then a truncated 3 byte sequence followed by ASCII.
        let chars = decode_all(b"\x80a\xe6\x97b").await;
        assert_eq!(chars, vec![REPLACEMENT_CHARACTER, 'a', REPLACEMENT_CHARACTER, 'b']);
    }

    #[tokio::test]
    async fn test_truncated_sequence_at_eof() {
        let chars = decode_all(b"x\xf0\x9f").await;
        assert_eq!(chars, vec!['x', REPLACEMENT_CHARACTER]);
    }

    #[tokio::test]
    async fn test_stream_error_is_propagated() {
        let mut input = gen_input_stream(vec![
            Ok(b'a'),
            Err(io::Error::other("boom")),
        ]);
        let mut reader = TextReader::new(&mut input);
        assert_eq!(reader.read_code_point().await.unwrap(), Some('a'));
        let error = reader.read_code_point().await.unwrap_err();
        assert_eq!(error.to_string(), "boom");
    }
}
