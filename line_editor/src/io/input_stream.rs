// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_stream::stream;
use futures_core::Stream;
use std::{io, pin::Pin};
use tokio::io::AsyncReadExt;

pub type PinnedInputStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// How many bytes are read from stdin at a time. A paste arrives in one or a few reads.
pub const STDIN_READ_BUFFER_SIZE: usize = 1_024;

/// Bytes from the process's stdin, one at a time. The stream ends at EOF, or right after
/// yielding the first read error.
///
/// Create this once and keep it in a [`crate::PromptEnvironment`] for as long as the
/// process prompts, bytes that were already read from stdin but not consumed by one
/// session are then seen by the next one.
#[must_use]
pub fn stdin_byte_stream() -> PinnedInputStream<io::Result<u8>> {
    let it = stream! {
        let mut stdin = tokio::io::stdin();
        let mut buffer = [0_u8; STDIN_READ_BUFFER_SIZE];
        loop {
            match stdin.read(&mut buffer).await {
                Ok(0) => break,
                Ok(count) => {
                    for byte in &buffer[..count] {
                        yield Ok(*byte);
                    }
                }
                Err(error) => {
                    yield Err(error);
                    break;
                }
            }
        }
    };
    Box::pin(it)
}
