//! Report rendering.
//!
//! Reports are rendered into memory in full before anything is written, so a
//! caller either emits the whole report or nothing.

use std::io::Write;

use crate::error::ClipstatsError;
use crate::options::OutputFormat;
use crate::stats::TextStats;
use crate::Result;

/// Render the complete report for `stats`.
///
/// `Text` produces:
///
/// ```text
/// Statistics:
///   Lines: <L>
///   Words: <W>
///   Characters: <C>
/// ```
///
/// `Json` produces a pretty-printed object with `lines`, `words` and
/// `characters` keys. Both end with a single newline.
pub fn render(stats: &TextStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(stats)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(stats)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_text(stats: &TextStats) -> String {
    format!(
        "Statistics:\n  Lines: {}\n  Words: {}\n  Characters: {}\n",
        stats.lines, stats.words, stats.characters
    )
}

/// Render `stats` and write the report to `writer` in one write, then flush.
pub fn write_report<W: Write>(
    mut writer: W,
    stats: &TextStats,
    format: OutputFormat,
) -> Result<()> {
    let report = render(stats, format)?;
    writer
        .write_all(report.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(ClipstatsError::OutputWrite)
}
