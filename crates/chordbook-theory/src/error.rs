//! Error types for note, chord, and registry operations.

use thiserror::Error;

/// Errors raised by chordbook theory operations.
///
/// Every variant is raised at the point of violation and leaves the
/// receiving collection or registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A value at a runtime boundary (note string, note list, chord book)
    /// could not be turned into a note or chord.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Two notes of a chord share a letter, or the chord name collides with
    /// one of its notes.
    #[error("duplicate note names in chord '{chord}': {names}")]
    DuplicateNoteNames { chord: String, names: String },

    /// The chord's note-set is already claimed by a registered chord.
    #[error("chord '{chord}' overlaps registered chord '{existing}'")]
    ChordOverlap { chord: String, existing: String },
}

impl TheoryError {
    /// Creates an `InvalidArgument` error from any displayable message.
    pub fn invalid(message: impl Into<String>) -> Self {
        TheoryError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns the stable error code (e.g., "THEORY_002").
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::InvalidArgument { .. } => "THEORY_001",
            TheoryError::DuplicateNoteNames { .. } => "THEORY_002",
            TheoryError::ChordOverlap { .. } => "THEORY_003",
        }
    }

    /// Returns the error category used when reporting.
    pub fn category(&self) -> &'static str {
        "theory"
    }
}
