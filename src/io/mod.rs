//! I/O abstractions for output destinations.
//!
//! This module provides:
//! - `OutputTarget`: Trait for output destinations
//! - Standard implementations for files and stdout
//! - An in-memory implementation for testing

mod memory;
mod output;
mod std_io;

pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::{FileOutput, StdoutOutput};
