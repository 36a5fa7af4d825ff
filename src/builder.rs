//! Builder for assembling TeeEngine instances.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::TeeArgs;
use crate::config::{DestinationSpec, WriteMode};
use crate::engine::TeeEngine;
use crate::io::{FileOutput, StdoutOutput};

/// Builds a [`TeeEngine`] from file arguments and a write-mode.
///
/// Stdout is always included as the first destination, marked externally
/// owned. Named files follow in the order they were added; duplicates are
/// kept and opened independently.
pub struct TeeBuilder {
    file_args: Vec<String>,
    extra_specs: Vec<DestinationSpec>,
    write_mode: WriteMode,
}

impl TeeBuilder {
    /// Create a new builder with no files and the default write-mode.
    pub fn new() -> Self {
        Self {
            file_args: Vec::new(),
            extra_specs: Vec::new(),
            write_mode: WriteMode::Truncate,
        }
    }

    /// Create a builder from parsed command-line arguments.
    pub fn from_args(args: &TeeArgs) -> Self {
        Self::new()
            .with_mode(args.write_mode)
            .files_from_args(&args.files)
    }

    /// Set the write-mode for named destinations.
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Add a named file destination.
    pub fn add_file(mut self, path: impl Into<String>) -> Self {
        self.file_args.push(path.into());
        self
    }

    /// Add every name in `args` as a file destination, in order.
    pub fn files_from_args(mut self, args: &[String]) -> Self {
        self.file_args.extend(args.iter().cloned());
        self
    }

    /// Add a pre-built destination specification after the named files.
    pub fn add_destination_spec(mut self, spec: DestinationSpec) -> Self {
        self.extra_specs.push(spec);
        self
    }

    /// Assemble the engine.
    pub fn build(self) -> TeeEngine {
        let mut destinations = Vec::with_capacity(self.file_args.len() + 1);
        destinations
            .push(DestinationSpec::new("-", Arc::new(StdoutOutput::new())).with_external());
        for raw in &self.file_args {
            destinations.push(DestinationSpec::new(
                raw.clone(),
                Arc::new(FileOutput::new(PathBuf::from(raw))),
            ));
        }
        destinations.extend(self.extra_specs);
        TeeEngine::new(self.write_mode, destinations)
    }
}

impl Default for TeeBuilder {
    fn default() -> Self {
        TeeBuilder::new()
    }
}
