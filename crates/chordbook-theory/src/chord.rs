//! Named chords of two or three notes.

use std::collections::HashSet;

use crate::error::TheoryError;
use crate::note::Note;

/// Minimum number of notes in a chord.
pub const MIN_CHORD_NOTES: usize = 2;

/// Maximum number of notes in a chord.
pub const MAX_CHORD_NOTES: usize = 3;

/// An immutable, named set of 2-3 notes with distinct letters.
///
/// Notes are stored sorted by letter then alteration. Two chords are equal
/// when their note-sets are equal; the name is ignored.
#[derive(Debug, Clone)]
pub struct Chord {
    notes: Vec<Note>,
    name: String,
}

impl Chord {
    /// Builds a chord from two notes and an optional third.
    ///
    /// # Errors
    /// `DuplicateNoteNames` if two notes share a letter, or if the name is
    /// itself a note whose letter matches one of the chord's notes.
    ///
    /// # Examples
    /// ```
    /// use chordbook_theory::{Chord, Note};
    ///
    /// let n = |s: &str| Note::parse(s).unwrap();
    /// let amaj = Chord::new(n("A"), n("B"), "Amaj", Some(n("C"))).unwrap();
    /// assert_eq!(amaj.to_string(), "Amaj");
    ///
    /// let err = Chord::new(n("E"), n("A"), "E", None).unwrap_err();
    /// assert_eq!(err.code(), "THEORY_002");
    /// ```
    pub fn new(
        first: Note,
        second: Note,
        name: impl Into<String>,
        third: Option<Note>,
    ) -> Result<Self, TheoryError> {
        let mut notes = vec![first, second];
        notes.extend(third);
        Self::from_notes(name, notes)
    }

    /// Builds a chord from a list of notes.
    ///
    /// # Errors
    /// `InvalidArgument` unless there are 2 or 3 notes, otherwise the same
    /// checks as [`Chord::new`].
    pub fn from_notes(name: impl Into<String>, mut notes: Vec<Note>) -> Result<Self, TheoryError> {
        let name = name.into();

        if !(MIN_CHORD_NOTES..=MAX_CHORD_NOTES).contains(&notes.len()) {
            return Err(TheoryError::invalid(format!(
                "chord '{}' needs {}-{} notes, got {}",
                name,
                MIN_CHORD_NOTES,
                MAX_CHORD_NOTES,
                notes.len()
            )));
        }

        let mut seen: Vec<char> = Vec::with_capacity(notes.len());
        let mut duplicates: Vec<String> = Vec::new();
        for note in &notes {
            if seen.contains(&note.letter()) {
                duplicates.push(note.to_string());
            } else {
                seen.push(note.letter());
            }
        }

        // The name shares the note namespace only when it spells a note.
        if let Ok(named) = Note::parse(&name) {
            if seen.contains(&named.letter()) {
                duplicates.push(name.clone());
            }
        }

        if !duplicates.is_empty() {
            return Err(TheoryError::DuplicateNoteNames {
                chord: name,
                names: duplicates.join(", "),
            });
        }

        notes.sort_by_key(|n| n.spelling_key());
        Ok(Self { notes, name })
    }

    /// The chord's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Notes sorted by letter then alteration.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Spellings of the notes, in stored order.
    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.to_string()).collect()
    }

    /// The chord's notes as an unordered set.
    pub fn note_set(&self) -> HashSet<Note> {
        self.notes.iter().copied().collect()
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.note_set() == other.note_set()
    }
}

impl Eq for Chord {}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(raw: &str) -> Note {
        Note::parse(raw).unwrap()
    }

    #[test]
    fn test_three_note_chord_sorted() {
        let chord = Chord::new(note("E"), note("C#"), "Amaj", Some(note("A"))).unwrap();
        assert_eq!(chord.note_names(), vec!["A", "C#", "E"]);
        assert_eq!(chord.name(), "Amaj");
    }

    #[test]
    fn test_name_not_a_note_is_allowed() {
        assert!(Chord::new(note("A"), note("B"), "Amaj", Some(note("C"))).is_ok());
        assert!(Chord::new(note("c#"), note("d#"), "c#5", None).is_ok());
    }

    #[test]
    fn test_name_colliding_with_note_rejected() {
        let err = Chord::new(note("E"), note("A"), "E", None).unwrap_err();
        assert_eq!(
            err,
            TheoryError::DuplicateNoteNames {
                chord: "E".to_string(),
                names: "E".to_string(),
            }
        );
    }

    #[test]
    fn test_shared_letter_rejected() {
        let err = Chord::new(note("C"), note("C#"), "Cluster", None).unwrap_err();
        assert!(matches!(err, TheoryError::DuplicateNoteNames { .. }));

        let err = Chord::new(note("A"), note("B"), "X", Some(note("a"))).unwrap_err();
        assert_eq!(err.code(), "THEORY_002");
    }

    #[test]
    fn test_note_count_enforced() {
        let err = Chord::from_notes("Solo", vec![note("A")]).unwrap_err();
        assert!(matches!(err, TheoryError::InvalidArgument { .. }));

        let four = vec![note("A"), note("B"), note("C"), note("D")];
        assert!(Chord::from_notes("Wide", four).is_err());
    }

    #[test]
    fn test_equality_ignores_name_and_order() {
        let first = Chord::new(note("E"), note("B"), "E5", None).unwrap();
        let second = Chord::new(note("B"), note("E"), "Emaj7add9", None).unwrap();
        assert_eq!(first, second);

        let other = Chord::new(note("E"), note("Bb"), "Eb5", None).unwrap();
        assert_ne!(first, other);
    }
}
