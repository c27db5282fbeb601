//! The statistics value computed for one input.

use serde::{Deserialize, Serialize};

use crate::counter::{count_chars, count_lines, count_words};
use crate::options::LineBreaks;

/// Line, word and character counts for one text.
///
/// A pure function of the text and the line-break convention; two texts that
/// are byte-identical always produce equal stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Line segments (see [`count_lines`])
    pub lines: u64,
    /// Whitespace-delimited tokens
    pub words: u64,
    /// Unicode scalar values
    pub characters: u64,
}

impl TextStats {
    /// Create stats with all counts zero (what empty input produces).
    pub fn new() -> Self {
        Self::default()
    }

    /// Count everything in `text`.
    pub fn from_text(text: &str, breaks: LineBreaks) -> Self {
        Self {
            lines: count_lines(text, breaks),
            words: count_words(text),
            characters: count_chars(text),
        }
    }
}
