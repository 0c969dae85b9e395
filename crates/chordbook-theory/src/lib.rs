//! Chordbook Theory Library
//!
//! Note identity with enharmonic equivalence, deduplicating note
//! collections, and a registry of chords looked up by their notes.
//!
//! # Overview
//!
//! Notes live on a cyclic 26-letter scale: each letter `A`..=`Z` has its
//! alphabet position, `#` adds half a step, `b` removes half a step, and the
//! result wraps, so `A#` and `Bb` (or `Ab` and `Z#`) share a pitch.
//!
//! # Example
//!
//! ```
//! use chordbook_theory::{Chord, ChordRegistry, Note, NoteCollection, TheoryError};
//!
//! let n = |s: &str| Note::parse(s).unwrap();
//!
//! let mut collection = NoteCollection::new();
//! collection.add(n("C#"));
//! collection.add(n("Lb"));
//! assert_eq!(collection.describe(), "Notes:\n  * C#\n  * Lb");
//!
//! let mut registry = ChordRegistry::new();
//! registry.add(Chord::new(n("E"), n("B"), "E5", None)?)?;
//!
//! let overlap = registry.add(Chord::new(n("E"), n("B"), "Emaj7add9", None)?);
//! assert!(matches!(overlap, Err(TheoryError::ChordOverlap { .. })));
//! assert_eq!(registry.get(&n("b"), &n("e"), None).unwrap().name(), "E5");
//! # Ok::<(), TheoryError>(())
//! ```
//!
//! # Modules
//!
//! - [`pitch`]: Alterations and pitch indices
//! - [`note`]: Spelled notes
//! - [`collection`]: Ordered, deduplicating note collection
//! - [`chord`]: Named chords of 2-3 notes
//! - [`registry`]: Chord registry with order-independent lookup
//! - [`book`]: JSON chord books
//! - [`error`]: Error types

pub mod book;
pub mod chord;
pub mod collection;
pub mod error;
pub mod note;
pub mod pitch;
pub mod registry;

// Re-export commonly used types at the crate root
pub use book::{BookIssue, BookReport, ChordBook, ChordEntry};
pub use chord::{Chord, MAX_CHORD_NOTES, MIN_CHORD_NOTES};
pub use collection::NoteCollection;
pub use error::TheoryError;
pub use note::Note;
pub use pitch::{pitch_index, Alteration, PitchIndex, ALPHABET_LEN};
pub use registry::ChordRegistry;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_registry_reachable_from_crate_root() {
        let n = |s: &str| Note::parse(s).unwrap();
        let mut registry = ChordRegistry::new();
        registry
            .add(Chord::new(n("E"), n("B"), "E5", None).unwrap())
            .unwrap();
        assert_eq!(registry.get(&n("B"), &n("E"), None).map(|c| c.name()), Some("E5"));
    }
}
