//! chordgen CLI - prints a random chord progression
//!
//! Takes no arguments and prints one progression in a random key.

use clap::Parser;
use std::process::ExitCode;

use chordgen_cli::cli_args::Cli;
use chordgen_cli::commands;

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match commands::generate::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
