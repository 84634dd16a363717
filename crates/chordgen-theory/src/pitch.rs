//! Pitch classes with sharps-only spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Number of pitch classes in an octave.
pub const PITCH_CLASS_COUNT: usize = 12;

/// One of the 12 pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

/// All pitch classes in ascending semitone order starting at C.
pub const PITCH_CLASSES: [PitchClass; PITCH_CLASS_COUNT] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Semitone index (0-11) with C = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at a semitone index, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        PITCH_CLASSES[index % PITCH_CLASS_COUNT]
    }

    /// Transpose upward by a number of semitones.
    pub fn transpose(self, semitones: u8) -> Self {
        Self::from_index(self.index() + semitones as usize)
    }

    /// Printable note name (e.g. "C", "F#").
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a sharps-only note name. Flats and enharmonic spellings such as
    /// "E#" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PITCH_CLASSES
            .iter()
            .copied()
            .find(|pc| pc.name() == trimmed)
            .ok_or_else(|| TheoryError::UnknownPitchClass {
                name: trimmed.to_string(),
            })
    }
}
