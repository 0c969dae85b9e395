//! Declarative chord books.
//!
//! A chord book is a JSON document listing named chords:
//!
//! ```json
//! { "chords": [ { "name": "Amaj", "notes": ["A", "C#", "E"] } ] }
//! ```
//!
//! Loading a book registers its chords in document order with the same
//! checks as building them by hand.

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::note::Note;
use crate::registry::ChordRegistry;

/// A list of chord definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordBook {
    /// Chord definitions, registered in this order.
    #[serde(default)]
    pub chords: Vec<ChordEntry>,
}

/// One named chord in a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChordEntry {
    /// Display name of the chord.
    pub name: String,
    /// The chord's notes (2-3), spelled as note strings.
    pub notes: Vec<Note>,
}

/// A book entry that could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIssue {
    /// Position of the entry in the book.
    pub index: usize,
    /// Name of the rejected chord.
    pub chord: String,
    /// Error code (see [`TheoryError::code`]).
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Result of checking every entry of a book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReport {
    /// Number of entries that registered cleanly.
    pub accepted: usize,
    /// Entries that were rejected, in book order.
    pub issues: Vec<BookIssue>,
}

impl BookReport {
    /// Returns true if every entry registered.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl ChordEntry {
    /// Builds the chord this entry describes.
    pub fn to_chord(&self) -> Result<Chord, TheoryError> {
        Chord::from_notes(self.name.clone(), self.notes.clone())
    }
}

impl ChordBook {
    /// Parses a book from JSON.
    ///
    /// # Errors
    /// `InvalidArgument` for malformed JSON, unknown fields, or note strings
    /// that do not parse.
    pub fn from_json(json: &str) -> Result<Self, TheoryError> {
        serde_json::from_str(json)
            .map_err(|e| TheoryError::invalid(format!("invalid chord book: {}", e)))
    }

    /// Serializes the book to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, TheoryError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TheoryError::invalid(format!("cannot serialize chord book: {}", e)))
    }

    /// Registers every entry, stopping at the first failure.
    ///
    /// # Errors
    /// The first `InvalidArgument`, `DuplicateNoteNames` or `ChordOverlap`
    /// raised while building or registering an entry.
    pub fn to_registry(&self) -> Result<ChordRegistry, TheoryError> {
        let mut registry = ChordRegistry::new();
        for entry in &self.chords {
            registry.add(entry.to_chord()?)?;
        }
        Ok(registry)
    }

    /// Registers every entry that can be registered and reports the rest.
    pub fn check(&self) -> BookReport {
        let mut registry = ChordRegistry::new();
        let mut report = BookReport::default();

        for (index, entry) in self.chords.iter().enumerate() {
            match entry.to_chord().and_then(|chord| registry.add(chord)) {
                Ok(()) => report.accepted += 1,
                Err(err) => report.issues.push(BookIssue {
                    index,
                    chord: entry.name.clone(),
                    code: err.code().to_string(),
                    message: err.to_string(),
                }),
            }
        }

        report
    }
}
