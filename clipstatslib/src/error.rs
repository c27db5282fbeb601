//! Error types for clipstatslib

use thiserror::Error;

/// Errors that can occur while gathering or reporting statistics
#[derive(Error, Debug)]
pub enum ClipstatsError {
    /// The input stream could not be read to completion, or was not valid UTF-8
    #[error("failed to read input: {0}")]
    InputRead(#[source] std::io::Error),

    /// The report could not be written
    #[error("failed to write report: {0}")]
    OutputWrite(#[source] std::io::Error),

    /// Statistics could not be serialized
    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}
