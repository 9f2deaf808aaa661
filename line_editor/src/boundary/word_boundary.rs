// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::GraphemeRange;
use unicode_segmentation::UnicodeSegmentation;

/// Word like segments (UAX #29 words that contain at least one alphanumeric char).
fn word_ranges(text: &str) -> impl Iterator<Item = GraphemeRange> + '_ {
    text.unicode_word_indices()
        .map(|(start, word)| GraphemeRange::new(start, start + word.len()))
}

/// The nearest word that starts before `position`, skipping any whitespace and
/// punctuation in between. If `position` is inside a word, that word is returned. Falls
/// back to the empty range at `0`.
#[must_use]
pub fn previous_word_range(text: &str, position: usize) -> GraphemeRange {
    word_ranges(text)
        .take_while(|range| range.start < position)
        .last()
        .unwrap_or(GraphemeRange::empty_at(0))
}

/// The nearest word that ends after `position`, skipping any whitespace and punctuation
/// in between. If `position` is inside a word, that word is returned. Falls back to the
/// empty range at `text.len()`.
#[must_use]
pub fn next_word_range(text: &str, position: usize) -> GraphemeRange {
    word_ranges(text)
        .find(|range| range.end > position)
        .unwrap_or(GraphemeRange::empty_at(text.len()))
}
