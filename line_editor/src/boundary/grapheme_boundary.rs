// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;
use unicode_segmentation::{Graphemes, UnicodeSegmentation};

/// Half open byte range `[start, end)` of a segment in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GraphemeRange {
    pub start: usize,
    pub end: usize,
}

impl GraphemeRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self { Self { start, end } }

    /// Zero width range sitting at `position`.
    #[must_use]
    pub fn empty_at(position: usize) -> Self { Self::new(position, position) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }

    #[must_use]
    pub fn len(&self) -> usize { self.end - self.start }
}

/// `\r` is folded into `\n` before segmenting, so that `"\r\n"` is two clusters and the
/// cursor can sit between them. Both are one byte, so offsets are unchanged.
fn fold_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Returns the grapheme cluster that contains `position`. When `position` is at (or
/// past) the end of `text` the result is the empty range at `text.len()`.
#[must_use]
pub fn grapheme_range(text: &str, position: usize) -> GraphemeRange {
    let len = text.len();
    if position >= len {
        return GraphemeRange::empty_at(len);
    }

    fold_carriage_returns(text)
        .grapheme_indices(true)
        .map(|(start, cluster)| GraphemeRange::new(start, start + cluster.len()))
        .find(|range| position < range.end)
        .unwrap_or(GraphemeRange::empty_at(len))
}

/// Snaps `position` forward to the nearest cluster boundary at or after it. Positions
/// past the end are clamped to `text.len()`.
#[must_use]
pub fn next_grapheme_boundary(text: &str, position: usize) -> usize {
    let range = grapheme_range(text, position);
    if position <= range.start {
        range.start
    } else {
        range.end
    }
}

/// Start of the cluster that ends at (the snapped) `position`, or `0` at the start of
/// the text.
#[must_use]
pub fn previous_grapheme_boundary(text: &str, position: usize) -> usize {
    let position = next_grapheme_boundary(text, position);
    match position {
        0 => 0,
        _ => grapheme_range(text, position - 1).start,
    }
}

/// Lazy sequence of the extended grapheme clusters in `text`. The returned iterator is
/// [`Clone`], so it can be restarted without touching `text` again.
#[must_use]
pub fn graphemes(text: &str) -> Graphemes<'_> { text.graphemes(true) }
