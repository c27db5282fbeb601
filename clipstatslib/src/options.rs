//! Options that control how text is split and how the report is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which characters end a line.
///
/// Whatever the convention, a `\r\n` pair is one terminator whenever `\r` is a
/// terminator on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreaks {
    /// Universal breaks plus vertical tab, form feed, the file/group/record
    /// separators, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR
    #[default]
    Unicode,
    /// `\n`, `\r\n` and a lone `\r`
    Universal,
    /// Only `\n`
    Lf,
}

impl LineBreaks {
    /// Names accepted by `FromStr`, in the order shown to users.
    pub const NAMES: [&'static str; 3] = ["unicode", "universal", "lf"];

    /// Whether `c` ends a line under this convention.
    pub fn is_terminator(self, c: char) -> bool {
        match self {
            LineBreaks::Lf => c == '\n',
            LineBreaks::Universal => matches!(c, '\n' | '\r'),
            LineBreaks::Unicode => matches!(
                c,
                '\n' | '\r'
                    | '\x0b'
                    | '\x0c'
                    | '\x1c'
                    | '\x1d'
                    | '\x1e'
                    | '\u{85}'
                    | '\u{2028}'
                    | '\u{2029}'
            ),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreaks::Unicode => "unicode",
            LineBreaks::Universal => "universal",
            LineBreaks::Lf => "lf",
        }
    }
}

impl FromStr for LineBreaks {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unicode" => Ok(LineBreaks::Unicode),
            "universal" => Ok(LineBreaks::Universal),
            "lf" => Ok(LineBreaks::Lf),
            _ => Err(format!("Unknown line break convention: {}", s)),
        }
    }
}

impl fmt::Display for LineBreaks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The indented `Statistics:` block
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

impl OutputFormat {
    /// Names accepted by `FromStr`.
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_default() {
        assert_eq!(LineBreaks::default(), LineBreaks::Unicode);
    }

    #[test]
    fn test_line_breaks_from_str() {
        assert_eq!("universal".parse::<LineBreaks>(), Ok(LineBreaks::Universal));
        assert_eq!("Unicode".parse::<LineBreaks>(), Ok(LineBreaks::Unicode));
        assert_eq!("LF".parse::<LineBreaks>(), Ok(LineBreaks::Lf));
        assert!("unix".parse::<LineBreaks>().is_err());
        assert!("crlf".parse::<LineBreaks>().is_err());
    }

    #[test]
    fn test_line_breaks_names_round_trip() {
        for name in LineBreaks::NAMES {
            let parsed: LineBreaks = name.parse().unwrap();
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn test_terminators() {
        assert!(LineBreaks::Lf.is_terminator('\n'));
        assert!(!LineBreaks::Lf.is_terminator('\r'));

        assert!(LineBreaks::Universal.is_terminator('\r'));
        assert!(!LineBreaks::Universal.is_terminator('\u{2028}'));

        assert!(LineBreaks::Unicode.is_terminator('\u{2028}'));
        assert!(LineBreaks::Unicode.is_terminator('\x0c'));
        assert!(!LineBreaks::Unicode.is_terminator('\t'));
        assert!(!LineBreaks::Unicode.is_terminator('\x1f'));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
