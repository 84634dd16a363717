//! Modes and diatonic scale construction.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::PitchClass;

/// Number of degrees in a diatonic scale.
pub const SCALE_LEN: usize = 7;

/// Semitone offsets of the major scale.
pub const MAJOR_OFFSETS: [u8; SCALE_LEN] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural minor scale.
pub const MINOR_OFFSETS: [u8; SCALE_LEN] = [0, 2, 3, 5, 7, 8, 10];

/// Key mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    /// Natural minor.
    Minor,
}

/// Both modes, in selection order.
pub const MODES: [Mode; 2] = [Mode::Major, Mode::Minor];

impl Mode {
    /// Semitone offsets from the root for degrees 1-7.
    pub fn offsets(self) -> &'static [u8; SCALE_LEN] {
        match self {
            Mode::Major => &MAJOR_OFFSETS,
            Mode::Minor => &MINOR_OFFSETS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "major" => Ok(Mode::Major),
            "minor" => Ok(Mode::Minor),
            other => Err(TheoryError::UnknownMode {
                name: other.to_string(),
            }),
        }
    }
}

/// Seven-note diatonic scale. Index 0 is the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale([PitchClass; SCALE_LEN]);

impl Scale {
    pub fn root(&self) -> PitchClass {
        self.0[0]
    }

    /// Pitch class of a 1-based scale degree, or `None` outside 1..=7.
    pub fn degree(&self, degree: u8) -> Option<PitchClass> {
        match degree {
            1..=7 => Some(self.0[degree as usize - 1]),
            _ => None,
        }
    }

    pub fn notes(&self) -> &[PitchClass; SCALE_LEN] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for Scale {
    type Output = PitchClass;

    fn index(&self, index: usize) -> &PitchClass {
        &self.0[index]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pc) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pc)?;
        }
        Ok(())
    }
}

/// Build the scale for a root and mode by stacking the mode's offsets on the
/// root and wrapping modulo 12.
pub fn build_scale(root: PitchClass, mode: Mode) -> Scale {
    let offsets = mode.offsets();
    let mut notes = [root; SCALE_LEN];
    for (note, &offset) in notes.iter_mut().zip(offsets.iter()) {
        *note = root.transpose(offset);
    }
    Scale(notes)
}
