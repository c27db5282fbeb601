//! Counting primitives and whole-stream reading.
//!
//! All counters operate on a complete `&str`. Streams are read to the end
//! before anything is counted, since a line or word may straddle any chunk
//! boundary.

use std::io::Read;

use crate::error::ClipstatsError;
use crate::options::LineBreaks;
use crate::stats::TextStats;
use crate::Result;

/// Count Unicode scalar values in `text`.
///
/// No trimming or normalization: a `\r\n` pair is two characters.
pub fn count_chars(text: &str) -> u64 {
    text.chars().count() as u64
}

/// Count maximal runs of non-whitespace in `text`.
///
/// Whitespace is the Unicode `White_Space` property (space, tab, the line
/// terminators and the wider Unicode spaces) plus the ASCII information
/// separators `\x1c`..=`\x1f`.
///
/// ```rust
/// use clipstatslib::count_words;
///
/// assert_eq!(count_words("  hello \t world\n"), 2);
/// assert_eq!(count_words("   \n\t  "), 0);
/// assert_eq!(count_words("a\x1fb c"), 3);
/// ```
pub fn count_words(text: &str) -> u64 {
    text.split(is_word_separator)
        .filter(|token| !token.is_empty())
        .count() as u64
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Count line segments in `text`.
///
/// Each terminator closes the segment before it, even an empty one, so
/// `"\n\n"` is two lines. Text after the last terminator is one more line.
/// A terminator at the very end does not open a new segment, and empty text
/// has no lines at all.
///
/// ```rust
/// use clipstatslib::{count_lines, LineBreaks};
///
/// assert_eq!(count_lines("", LineBreaks::Universal), 0);
/// assert_eq!(count_lines("one", LineBreaks::Universal), 1);
/// assert_eq!(count_lines("one\r\ntwo\r\n", LineBreaks::Universal), 2);
/// ```
pub fn count_lines(text: &str, breaks: LineBreaks) -> u64 {
    let mut lines = 0;
    let mut open = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if breaks.is_terminator(c) {
            if c == '\r' {
                chars.next_if_eq(&'\n');
            }
            lines += 1;
            open = false;
        } else {
            open = true;
        }
    }

    if open {
        lines += 1;
    }
    lines
}

/// Read `reader` to the end as UTF-8 and count it.
///
/// Fails with [`ClipstatsError::InputRead`] if the read fails partway or the
/// bytes are not valid UTF-8; in either case nothing is counted.
pub fn read_stats<R: Read>(mut reader: R, breaks: LineBreaks) -> Result<TextStats> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(ClipstatsError::InputRead)?;
    Ok(TextStats::from_text(&text, breaks))
}
