//! Error types for teeplex operations.
//!
//! Every failure is fatal to the run: the caller is expected to print the
//! error and exit non-zero. There is no aggregation and no per-destination
//! recovery.

use std::fmt;

use thiserror::Error;

/// Stage where a fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while parsing command-line arguments
    ParseArgs,
    /// Error while opening a destination
    Open,
    /// Error while reading the input stream
    Read,
    /// Error while writing to a destination
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::ParseArgs => write!(f, "ParseArgs"),
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// A fatal error with context.
#[derive(Debug, Error)]
#[error("[{stage}] {target}: {source}")]
pub struct TeeError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target ("-" for stdin/stdout, file path, flag name)
    pub target: String,
    /// The underlying error
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TeeError {
    /// Create a new error from a stage, a target identifier, and a source.
    pub fn new(
        stage: Stage,
        target: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            stage,
            target: target.into(),
            source: source.into(),
        }
    }
}
