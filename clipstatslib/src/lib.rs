//! # clipstatslib
//!
//! Line, word and character statistics for a block of text, as reported by
//! the `clipstats` clipboard hook.
//!
//! ## Overview
//!
//! A clipboard manager runs hooks with the clipboard text piped to stdin. This
//! library holds everything that hook does besides process plumbing:
//!
//! - **Counting**: pure functions over a `&str` (`count_lines`, `count_words`,
//!   `count_chars`) and the `TextStats` value they produce
//! - **Reading**: `read_stats` consumes a whole stream before counting, so a
//!   failed read never yields partial statistics
//! - **Reporting**: `render` builds the complete report in memory and
//!   `write_report` emits it in a single write
//!
//! ## Counting rules
//!
//! - **Characters**: Unicode scalar values, exactly as present in the input
//! - **Words**: maximal runs of non-whitespace; leading, trailing and repeated
//!   whitespace produce no tokens
//! - **Lines**: segments between line terminators; a trailing terminator does
//!   not open an extra segment and empty input has no lines
//!
//! ## Example
//!
//! ```rust
//! use clipstatslib::{read_stats, render, LineBreaks, OutputFormat};
//!
//! let stats = read_stats("hello world\n".as_bytes(), LineBreaks::default()).unwrap();
//! assert_eq!(stats.lines, 1);
//! assert_eq!(stats.words, 2);
//! assert_eq!(stats.characters, 12);
//!
//! let report = render(&stats, OutputFormat::Text).unwrap();
//! assert_eq!(
//!     report,
//!     "Statistics:\n  Lines: 1\n  Words: 2\n  Characters: 12\n"
//! );
//! ```

pub mod counter;
pub mod error;
pub mod options;
pub mod report;
pub mod stats;

pub use counter::{count_chars, count_lines, count_words, read_stats};
pub use error::ClipstatsError;
pub use options::{LineBreaks, OutputFormat};
pub use report::{render, write_report};
pub use stats::TextStats;

/// Result type for clipstatslib operations
pub type Result<T> = std::result::Result<T, ClipstatsError>;
