//! # teeplex
//!
//! A fan-out stream copier in the manner of `tee(1)`: copy one input stream
//! to standard output and to zero or more named files simultaneously.
//!
//! ## Overview
//!
//! teeplex provides:
//! - **Fan-out writes**: every byte of the input is written to every
//!   destination, in a fixed order, before the next byte is read
//! - **Write-mode selection**: named files are either truncated or appended
//!   to, uniformly, chosen once per run
//! - **Fail-fast errors**: the first open or write failure aborts the whole
//!   run with a diagnostic naming the destination
//! - **Interrupt-ignore capability**: an installable, reversible setting that
//!   discards interrupt requests while a copy is running
//!
//! Standard output is modeled as an ordinary destination that happens to be
//! owned externally: it is always first in the list, never truncated and
//! never closed by this crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use teeplex::{TeeBuilder, WriteMode};
//!
//! fn main() -> Result<(), teeplex::TeeError> {
//!     let engine = TeeBuilder::new()
//!         .with_mode(WriteMode::Append)
//!         .add_file("copy.log")
//!         .build();
//!
//!     let copied = engine.run(std::io::stdin().lock())?;
//!     eprintln!("copied {copied} bytes");
//!     Ok(())
//! }
//! ```

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod signal;

// Re-exports for convenience
pub use builder::TeeBuilder;
pub use cli::{TeeArgs, parse_args};
pub use config::{DestinationSpec, WriteMode};
pub use engine::TeeEngine;
pub use error::{Stage, TeeError};
pub use io::{FileOutput, InMemorySink, OutputTarget, StdoutOutput};
pub use signal::InterruptGuard;
