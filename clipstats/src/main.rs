//! # clipstats
//!
//! A clipboard hook that reports line, word and character counts.
//!
//! ## Overview
//!
//! The clipboard manager pipes the clipboard text to this program's stdin and
//! shows whatever it prints. The whole input is read before anything is
//! counted, and the report is written only once counting has succeeded, so the
//! host sees either a complete report or no output and a non-zero exit.
//!
//! ## Usage
//!
//! ```bash
//! # What the host does
//! printf 'hello world\n' | clipstats
//! # Statistics:
//! #   Lines: 1
//! #   Words: 2
//! #   Characters: 12
//!
//! # Machine-readable output
//! clipstats --output json < notes.txt
//!
//! # Break lines only on \n, \r\n and \r
//! clipstats --line-breaks universal < notes.txt
//! ```

use std::io;
use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use clipstatslib::{read_stats, write_report, LineBreaks, OutputFormat};
use console::style;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("clipstats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report line, word and character counts of text read from stdin")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(OutputFormat::NAMES)
                .help("Report format [default: text]"),
        )
        .arg(
            Arg::new("line-breaks")
                .short('l')
                .long("line-breaks")
                .value_parser(LineBreaks::NAMES)
                .help("Characters that end a line [default: unicode]"),
        )
}

/// Extract report format from matches
fn extract_format(matches: &ArgMatches) -> Result<OutputFormat, anyhow::Error> {
    match matches.get_one::<String>("output") {
        Some(value) => value.parse().map_err(anyhow::Error::msg),
        None => Ok(OutputFormat::default()),
    }
}

/// Extract line-break convention from matches
fn extract_line_breaks(matches: &ArgMatches) -> Result<LineBreaks, anyhow::Error> {
    match matches.get_one::<String>("line-breaks") {
        Some(value) => value.parse().map_err(anyhow::Error::msg),
        None => Ok(LineBreaks::default()),
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let format = extract_format(matches)?;
    let breaks = extract_line_breaks(matches)?;

    let stats = read_stats(io::stdin().lock(), breaks)?;
    write_report(io::stdout().lock(), &stats, format)?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = build_command().try_get_matches_from(["clipstats"]).unwrap();
        assert!(matches.get_one::<String>("output").is_none());
        assert!(matches.get_one::<String>("line-breaks").is_none());
        assert_eq!(extract_format(&matches).unwrap(), OutputFormat::Text);
        assert_eq!(extract_line_breaks(&matches).unwrap(), LineBreaks::Unicode);
    }

    #[test]
    fn test_explicit_options() {
        let matches = build_command()
            .try_get_matches_from(["clipstats", "-o", "json", "--line-breaks", "universal"])
            .unwrap();
        assert_eq!(extract_format(&matches).unwrap(), OutputFormat::Json);
        assert_eq!(extract_line_breaks(&matches).unwrap(), LineBreaks::Universal);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(build_command()
            .try_get_matches_from(["clipstats", "--output", "csv"])
            .is_err());
    }

    #[test]
    fn test_rejects_unlisted_line_breaks() {
        assert!(build_command()
            .try_get_matches_from(["clipstats", "--line-breaks", "unix"])
            .is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(build_command()
            .try_get_matches_from(["clipstats", "file.txt"])
            .is_err());
    }
}
