//! Diatonic triads: per-degree qualities and chord naming.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::PitchClass;
use crate::progression::ProgressionTemplate;
use crate::scale::{Mode, Scale, SCALE_LEN};

/// Triad quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "min")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
}

/// Triad qualities for degrees 1-7 of a major key.
pub const MAJOR_QUALITIES: [ChordQuality; SCALE_LEN] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Triad qualities for degrees 1-7 of a natural minor key.
pub const MINOR_QUALITIES: [ChordQuality; SCALE_LEN] = [
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
];

impl ChordQuality {
    /// Table token ("maj", "min", "dim").
    pub fn token(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Diminished => "dim",
        }
    }

    /// Parse a table token. Unrecognized tokens fall back to `Major`, so the
    /// chord renders as the bare root.
    pub fn from_token(token: &str) -> Self {
        match token {
            "min" => ChordQuality::Minor,
            "dim" => ChordQuality::Diminished,
            _ => ChordQuality::Major,
        }
    }

    /// Suffix appended to the root in a chord name.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
        }
    }
}

/// Quality table for a mode.
pub fn qualities(mode: Mode) -> &'static [ChordQuality; SCALE_LEN] {
    match mode {
        Mode::Major => &MAJOR_QUALITIES,
        Mode::Minor => &MINOR_QUALITIES,
    }
}

/// A triad identified by its root and quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: ChordQuality,
}

impl Chord {
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    pub fn name(&self) -> String {
        chord_name(self.root, self.quality)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&chord_name(self.root, self.quality))
    }
}

/// Printable chord name: "C", "Am", "Bdim".
pub fn chord_name(root: PitchClass, quality: ChordQuality) -> String {
    format!("{}{}", root, quality.suffix())
}

/// Resolve a 1-based scale degree to its diatonic triad.
///
/// # Errors
/// Returns [`TheoryError::InvalidDegree`] if `degree` is outside 1..=7.
pub fn degree_to_chord(scale: &Scale, degree: u8, mode: Mode) -> Result<Chord, TheoryError> {
    let root = scale
        .degree(degree)
        .ok_or(TheoryError::InvalidDegree { degree })?;
    let quality = qualities(mode)[degree as usize - 1];
    Ok(Chord::new(root, quality))
}

/// Render every degree of a template, in order.
pub fn render_progression(
    scale: &Scale,
    template: &ProgressionTemplate,
    mode: Mode,
) -> Result<Vec<Chord>, TheoryError> {
    template
        .degrees
        .iter()
        .map(|&degree| degree_to_chord(scale, degree, mode))
        .collect()
}
