//! Command-line interface for spellnum
//!
//! Reads integer literals from piped stdin (one per line) or from the arguments
//! and prints each one spelled out in English.

use crossterm::tty::IsTty;
use spellnum::spell::cli::command;
use spellnum::spell::{logging, run, Origin, RunConfig, RunError, RunSummary, TokenSource};
use std::io;

fn main() {
    let matches = command().get_matches();
    let config = RunConfig::from_matches(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    logging::init(config.verbosity);

    let stdin = io::stdin();
    let origin = config.input.resolve(stdin.is_tty());
    tracing::debug!(?origin, format = ?config.format, "starting");

    if let Err(e) = execute(&config, origin, stdin) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(config: &RunConfig, origin: Origin, stdin: io::Stdin) -> Result<RunSummary, RunError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    match origin {
        Origin::Stdin => run(
            config,
            TokenSource::from_reader(stdin.lock()),
            &mut out,
            &mut err,
        ),
        Origin::Args => run(
            config,
            TokenSource::from_args(config.numbers.iter().cloned()),
            &mut out,
            &mut err,
        ),
    }
}
