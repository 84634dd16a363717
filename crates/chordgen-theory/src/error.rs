//! Error types for the theory pipeline.

use thiserror::Error;

/// Errors that can occur while building scales or rendering chords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("scale degree {degree} out of range (expected 1..=7)")]
    InvalidDegree { degree: u8 },
    #[error("unknown pitch class '{name}'")]
    UnknownPitchClass { name: String },
    #[error("unknown mode '{name}' (expected 'major' or 'minor')")]
    UnknownMode { name: String },
}

impl TheoryError {
    /// Stable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::InvalidDegree { .. } => "THEORY_001",
            TheoryError::UnknownPitchClass { .. } => "THEORY_002",
            TheoryError::UnknownMode { .. } => "THEORY_003",
        }
    }

    pub fn category(&self) -> &'static str {
        "theory"
    }
}
