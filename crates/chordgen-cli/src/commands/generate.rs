//! Generate command implementation
//!
//! Generates one random progression and prints it as plain text.

use anyhow::{Context, Result};
use chordgen_theory::{generate_with_seed, Progression};
use std::process::ExitCode;

pub const BANNER: &str = "Random Chord Progression Generator";
pub const TIP: &str = "Tip: Try 4 beats per chord.";

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success
pub fn run() -> Result<ExitCode> {
    let progression = generate_with_seed(rand::random::<u32>())
        .context("failed to generate progression")?;
    print!("{}", render_text(&progression));
    Ok(ExitCode::SUCCESS)
}

/// Render the five-line report: banner, key, numerals, chords and tip.
pub fn render_text(progression: &Progression) -> String {
    format!(
        "{}\nKey: {}\nProgression: {}\nChords: {}\n{}\n",
        BANNER,
        progression.key_label(),
        progression.numerals_line(),
        progression.chords_line(),
        TIP
    )
}
