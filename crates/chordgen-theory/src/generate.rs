//! Pipeline entry points: select a key, build its scale, pick a template and
//! render the chords.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::chord::{render_progression, Chord};
use crate::error::TheoryError;
use crate::pitch::PitchClass;
use crate::progression::{pick_key_and_mode, pick_progression, ProgressionTemplate};
use crate::rng::{create_stream_rng, KEY_STREAM, PROGRESSION_STREAM};
use crate::scale::{build_scale, Mode, Scale};

/// A fully rendered progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub root: PitchClass,
    pub mode: Mode,
    pub scale: Scale,
    pub numerals: Vec<String>,
    pub degrees: Vec<u8>,
    pub chords: Vec<String>,
}

impl Progression {
    /// Render a template in a given key.
    pub fn render(
        root: PitchClass,
        mode: Mode,
        template: &ProgressionTemplate,
    ) -> Result<Self, TheoryError> {
        let scale = build_scale(root, mode);
        let chords = render_progression(&scale, template, mode)?;
        Ok(Self {
            root,
            mode,
            scale,
            numerals: template.numerals.iter().map(|n| n.to_string()).collect(),
            degrees: template.degrees.to_vec(),
            chords: chords.iter().map(Chord::name).collect(),
        })
    }

    /// "C major"
    pub fn key_label(&self) -> String {
        format!("{} {}", self.root, self.mode)
    }

    pub fn numerals_line(&self) -> String {
        self.numerals.join(" ")
    }

    pub fn chords_line(&self) -> String {
        self.chords.join(" ")
    }
}

/// Run the pipeline with a single random source.
pub fn generate_progression<R: Rng>(rng: &mut R) -> Result<Progression, TheoryError> {
    let (root, mode) = pick_key_and_mode(rng);
    let template = pick_progression(mode, rng);
    Progression::render(root, mode, template)
}

/// Run the pipeline deterministically from a base seed, with independent
/// streams for key selection and template selection.
pub fn generate_with_seed(seed: u32) -> Result<Progression, TheoryError> {
    let mut key_rng = create_stream_rng(seed, KEY_STREAM);
    let mut progression_rng = create_stream_rng(seed, PROGRESSION_STREAM);

    let (root, mode) = pick_key_and_mode(&mut key_rng);
    let template = pick_progression(mode, &mut progression_rng);
    Progression::render(root, mode, template)
}
