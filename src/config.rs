//! Write-mode and destination specifications.

use std::fmt;
use std::sync::Arc;

use crate::io::OutputTarget;

/// How named destinations are opened.
///
/// Selected once per run and applied uniformly to every named destination.
/// Externally owned destinations (stdout) are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Overwrite existing content
    #[default]
    Truncate,
    /// Extend existing content
    Append,
}

impl WriteMode {
    /// Human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            WriteMode::Truncate => "truncate",
            WriteMode::Append => "append",
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Specification for a single destination of the fan-out copy.
#[derive(Debug, Clone)]
pub struct DestinationSpec {
    /// Raw destination argument ("-" for stdout, file path otherwise)
    pub raw: String,
    /// The output target implementation
    pub target: Arc<dyn OutputTarget>,
    /// Owned externally: picked up as-is, never truncated, never closed
    pub external: bool,
}

impl DestinationSpec {
    /// Create a new destination specification.
    pub fn new(raw: impl Into<String>, target: Arc<dyn OutputTarget>) -> Self {
        Self {
            raw: raw.into(),
            target,
            external: false,
        }
    }

    /// Mark the destination as externally owned.
    pub fn with_external(mut self) -> Self {
        self.external = true;
        self
    }
}
