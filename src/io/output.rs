//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

use crate::config::WriteMode;

/// Trait for writable destinations of the fan-out copy.
///
/// Implementors provide a way to open a writable stream to destinations
/// such as files, stdout, or in-memory buffers.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages. Convention: "-" for stdout,
    /// file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open_truncate(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> std::io::Result<Box<dyn Write + Send>>;

    /// Open the target in the given write-mode.
    fn open(&self, mode: WriteMode) -> std::io::Result<Box<dyn Write + Send>> {
        match mode {
            WriteMode::Truncate => self.open_truncate(),
            WriteMode::Append => self.open_append(),
        }
    }
}
