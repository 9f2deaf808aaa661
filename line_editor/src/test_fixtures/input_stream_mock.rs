// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::PinnedInputStream;
use async_stream::stream;
use std::io;

/// Yields the items of `generator_vec` in order, then ends.
pub fn gen_input_stream<T>(generator_vec: Vec<T>) -> PinnedInputStream<T>
where
    T: Send + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

/// The UTF-8 bytes of `text`, as a terminal in raw mode would send them when typed.
#[must_use]
pub fn gen_input_stream_from_str(text: &str) -> PinnedInputStream<io::Result<u8>> {
    gen_input_stream(text.bytes().map(Ok).collect())
}
