//! chordgen theory core - random diatonic chord progressions
//!
//! This crate turns a key and a progression template into chord names. The
//! pipeline is a handful of pure functions over constant tables:
//!
//! 1. [`progression::pick_key_and_mode`] picks a root and a mode.
//! 2. [`scale::build_scale`] stacks the mode's semitone offsets on the root.
//! 3. [`progression::pick_progression`] picks a template for the mode.
//! 4. [`chord::degree_to_chord`] maps each degree to a named triad.
//!
//! # Determinism
//!
//! Randomness is always passed in. [`generate_with_seed`] derives separate
//! PCG32 streams for key and template selection from one base seed, so the
//! same seed always yields the same progression.
//!
//! # Example
//!
//! ```
//! use chordgen_theory::{build_scale, degree_to_chord, Mode, PitchClass};
//!
//! let scale = build_scale(PitchClass::C, Mode::Major);
//! let chord = degree_to_chord(&scale, 6, Mode::Major).unwrap();
//! assert_eq!(chord.to_string(), "Am");
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: Sharps-only pitch classes
//! - [`scale`]: Modes and scale construction
//! - [`chord`]: Chord qualities and naming
//! - [`progression`]: Templates and random selectors
//! - [`rng`]: Seeded PCG32 streams
//! - [`generate`]: Pipeline entry points

pub mod chord;
pub mod error;
pub mod generate;
pub mod pitch;
pub mod progression;
pub mod rng;
pub mod scale;

// Re-export main types
pub use chord::{chord_name, degree_to_chord, render_progression, Chord, ChordQuality};
pub use error::TheoryError;
pub use generate::{generate_progression, generate_with_seed, Progression};
pub use pitch::{PitchClass, PITCH_CLASSES};
pub use progression::{pick_key_and_mode, pick_progression, ProgressionTemplate};
pub use scale::{build_scale, Mode, Scale};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
