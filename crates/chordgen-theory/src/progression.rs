//! Progression templates and the random key/progression selectors.

use rand::Rng;

use crate::pitch::{PitchClass, PITCH_CLASSES};
use crate::scale::{Mode, MODES};

/// A chord progression expressed as scale degrees, with the roman numerals
/// used to display it. Both slices are aligned index-for-index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressionTemplate {
    pub numerals: &'static [&'static str],
    pub degrees: &'static [u8],
}

impl ProgressionTemplate {
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Numerals joined with single spaces ("I V vi IV").
    pub fn numerals_joined(&self) -> String {
        self.numerals.join(" ")
    }
}

pub const MAJOR_PROGRESSIONS: [ProgressionTemplate; 4] = [
    ProgressionTemplate {
        numerals: &["I", "V", "vi", "IV"],
        degrees: &[1, 5, 6, 4],
    },
    ProgressionTemplate {
        numerals: &["I", "vi", "IV", "V"],
        degrees: &[1, 6, 4, 5],
    },
    ProgressionTemplate {
        numerals: &["vi", "IV", "I", "V"],
        degrees: &[6, 4, 1, 5],
    },
    ProgressionTemplate {
        numerals: &["I", "IV", "V", "I"],
        degrees: &[1, 4, 5, 1],
    },
];

pub const MINOR_PROGRESSIONS: [ProgressionTemplate; 4] = [
    ProgressionTemplate {
        numerals: &["i", "VI", "III", "VII"],
        degrees: &[1, 6, 3, 7],
    },
    ProgressionTemplate {
        numerals: &["i", "iv", "v", "i"],
        degrees: &[1, 4, 5, 1],
    },
    ProgressionTemplate {
        numerals: &["i", "VII", "VI", "VII"],
        degrees: &[1, 7, 6, 7],
    },
    ProgressionTemplate {
        numerals: &["i", "VI", "VII", "i"],
        degrees: &[1, 6, 7, 1],
    },
];

/// Template table for a mode.
pub fn templates(mode: Mode) -> &'static [ProgressionTemplate] {
    match mode {
        Mode::Major => &MAJOR_PROGRESSIONS,
        Mode::Minor => &MINOR_PROGRESSIONS,
    }
}

/// Pick a root and a mode uniformly and independently.
pub fn pick_key_and_mode<R: Rng>(rng: &mut R) -> (PitchClass, Mode) {
    let root = PITCH_CLASSES[rng.gen_range(0..PITCH_CLASSES.len())];
    let mode = MODES[rng.gen_range(0..MODES.len())];
    (root, mode)
}

/// Pick one template uniformly from the mode's table.
pub fn pick_progression<R: Rng>(mode: Mode, rng: &mut R) -> &'static ProgressionTemplate {
    let table = templates(mode);
    &table[rng.gen_range(0..table.len())]
}
