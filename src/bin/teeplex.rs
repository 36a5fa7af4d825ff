use std::io;

use teeplex::error::{Stage, TeeError};
use teeplex::signal::InterruptGuard;
use teeplex::{TeeBuilder, cli};

fn print_usage() {
    eprintln!("Usage: teeplex [-a] [-i] [FILE ...]");
    eprintln!();
    eprintln!("Copy standard input to standard output and to every FILE.");
    eprintln!();
    eprintln!("  -a    append to FILEs instead of truncating them");
    eprintln!("  -i    ignore interrupt signals");
}

fn run() -> Result<(), TeeError> {
    let args = cli::parse_args(std::env::args().skip(1))?;

    // Installed before any destination is opened and held for the remainder
    // of the process.
    let _guard = if args.ignore_interrupts {
        Some(InterruptGuard::install().map_err(|e| TeeError::new(Stage::ParseArgs, "-i", e))?)
    } else {
        None
    };

    let engine = TeeBuilder::from_args(&args).build();
    let stdin = io::stdin();
    engine.run(stdin.lock())?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("teeplex: {e}");
        if e.stage == Stage::ParseArgs {
            print_usage();
        }
        std::process::exit(1);
    }
}
