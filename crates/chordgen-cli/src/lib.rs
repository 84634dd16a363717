//! chordgen CLI library.
//!
//! Argument definitions and the generate command, split out of the binary so
//! they can be tested directly.

pub mod cli_args;
pub mod commands;
