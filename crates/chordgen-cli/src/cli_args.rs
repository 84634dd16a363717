//! CLI argument definitions for the chordgen command-line interface.
//!
//! The `#[derive(Parser)]` type lives here, keeping `main.rs` focused on
//! dispatch. The program takes no options; clap supplies `--help` and
//! `--version` and rejects everything else.

use clap::Parser;

/// chordgen - Random Chord Progression Generator
#[derive(Parser, Debug)]
#[command(name = "chordgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
