//! Command-line argument parsing.
//!
//! The surface is `tee(1)`-compatible: `teeplex [-a] [-i] [FILE ...]`.
//! Switches may be clustered (`-ai`) and appear in any order before the file
//! names; the first non-switch argument or a literal `--` ends option
//! scanning, matching getopt behavior. An unrecognized switch is a fatal
//! configuration error.

use std::io;

use crate::config::WriteMode;
use crate::error::{Stage, TeeError};

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct TeeArgs {
    /// How named destinations are opened.
    pub write_mode: WriteMode,
    /// Discard interrupt requests for the remainder of execution.
    pub ignore_interrupts: bool,
    /// Destination file names, in argument order.
    pub files: Vec<String>,
}

/// Parse the argument list (without the program name).
pub fn parse_args<I>(args: I) -> Result<TeeArgs, TeeError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut write_mode = WriteMode::Truncate;
    let mut ignore_interrupts = false;

    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        if arg == "--" {
            idx += 1;
            break;
        }
        let Some(switches) = arg.strip_prefix('-').filter(|s| !s.is_empty()) else {
            // First non-switch argument ends option scanning.
            break;
        };
        for switch in switches.chars() {
            match switch {
                'a' => write_mode = WriteMode::Append,
                'i' => ignore_interrupts = true,
                other => {
                    return Err(TeeError::new(
                        Stage::ParseArgs,
                        format!("-{other}"),
                        io::Error::new(io::ErrorKind::InvalidInput, "unrecognized option"),
                    ));
                }
            }
        }
        idx += 1;
    }

    Ok(TeeArgs {
        write_mode,
        ignore_interrupts,
        files: args[idx..].to_vec(),
    })
}
