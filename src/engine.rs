//! The fan-out copy engine: open destinations, stream bytes, close.

use std::io::{ErrorKind, Read, Write};

use crate::config::{DestinationSpec, WriteMode};
use crate::error::{Stage, TeeError};

/// A destination that has been opened for writing.
struct OpenDestination {
    raw: String,
    writer: Box<dyn Write + Send>,
}

/// Engine orchestrating a single fan-out copy run.
///
/// A run opens every destination in list order, copies the input one byte at
/// a time to every handle, then closes the handles it owns. Any open or write
/// failure aborts the run with an error naming the destination; earlier
/// handles are released by drop on the error path.
pub struct TeeEngine {
    mode: WriteMode,
    destinations: Vec<DestinationSpec>,
}

impl TeeEngine {
    /// Create a new engine.
    pub fn new(mode: WriteMode, destinations: Vec<DestinationSpec>) -> Self {
        Self { mode, destinations }
    }

    /// Get the write-mode.
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Get the destination specifications.
    pub fn destinations(&self) -> &[DestinationSpec] {
        &self.destinations
    }

    /// Copy `input` to every destination until end-of-stream.
    ///
    /// Returns the number of bytes copied.
    pub fn run<R: Read>(&self, input: R) -> Result<u64, TeeError> {
        let mut open = self.open_all()?;
        let copied = copy_stream(input, &mut open)?;
        close_all(open);
        Ok(copied)
    }

    /// Open every destination in list order.
    fn open_all(&self) -> Result<Vec<OpenDestination>, TeeError> {
        let mut open = Vec::with_capacity(self.destinations.len());
        for spec in &self.destinations {
            // The write-mode applies only to named destinations; externally
            // owned streams are picked up as-is, never truncated.
            let mode = if spec.external {
                WriteMode::Append
            } else {
                self.mode
            };
            let writer = spec.target.open(mode).map_err(|e| {
                TeeError::new(Stage::Open, format!("{} [{}]", spec.raw, mode), e)
            })?;
            open.push(OpenDestination {
                raw: spec.raw.clone(),
                writer,
            });
        }
        Ok(open)
    }
}

/// Read one byte at a time until end-of-stream, fanning each byte out to
/// every destination in order.
///
/// Byte-at-a-time writes keep all destinations at the same byte index up to
/// any failure point, at a known cost in throughput.
fn copy_stream<R: Read>(
    mut input: R,
    destinations: &mut [OpenDestination],
) -> Result<u64, TeeError> {
    let mut byte = [0u8; 1];
    let mut copied = 0u64;
    loop {
        match input.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                for dest in destinations.iter_mut() {
                    dest.writer
                        .write_all(&byte)
                        .map_err(|e| TeeError::new(Stage::Write, dest.raw.clone(), e))?;
                }
                copied += 1;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TeeError::new(Stage::Read, "-", e)),
        }
    }
    Ok(copied)
}

/// Flush and drop every handle.
///
/// Errors are intentionally ignored; closing is best-effort cleanup.
/// Dropping a file handle closes it; the stdout handle only releases the
/// process stream, which stays open.
fn close_all(destinations: Vec<OpenDestination>) {
    for mut dest in destinations {
        let _ = dest.writer.flush();
    }
}
