//! Registry of chords keyed by their note-sets.

use std::collections::BTreeSet;

use crate::book::{ChordBook, ChordEntry};
use crate::chord::Chord;
use crate::error::TheoryError;
use crate::note::Note;

/// Registered chords, no two sharing a note-set.
#[derive(Debug, Clone, Default)]
pub struct ChordRegistry {
    chords: Vec<Chord>,
}

impl ChordRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `chord`.
    ///
    /// # Errors
    /// `ChordOverlap` if a registered chord has the same note-set. The
    /// registry is left unchanged.
    pub fn add(&mut self, chord: Chord) -> Result<(), TheoryError> {
        if let Some(existing) = self.chords.iter().find(|c| **c == chord) {
            return Err(TheoryError::ChordOverlap {
                chord: chord.name().to_string(),
                existing: existing.name().to_string(),
            });
        }
        self.chords.push(chord);
        Ok(())
    }

    /// Looks up the chord made of exactly these notes, in any order.
    ///
    /// Notes are matched by spelling, so `A#` does not find a chord stored
    /// with `Bb`.
    ///
    /// # Examples
    /// ```
    /// use chordbook_theory::{Chord, ChordRegistry, Note};
    ///
    /// let n = |s: &str| Note::parse(s).unwrap();
    /// let mut registry = ChordRegistry::new();
    /// registry.add(Chord::new(n("A"), n("B"), "Amaj", Some(n("C"))).unwrap()).unwrap();
    ///
    /// assert_eq!(registry.get(&n("B"), &n("C"), Some(&n("A"))).unwrap().name(), "Amaj");
    /// assert!(registry.get(&n("D"), &n("Z"), None).is_none());
    /// ```
    pub fn get(&self, first: &Note, second: &Note, third: Option<&Note>) -> Option<&Chord> {
        let mut query = vec![*first, *second];
        query.extend(third.copied());
        self.find(&query)
    }

    /// Slice form of [`ChordRegistry::get`].
    pub fn find(&self, notes: &[Note]) -> Option<&Chord> {
        let query = spelling_set(notes);
        self.chords
            .iter()
            .find(|chord| spelling_set(chord.notes()) == query)
    }

    /// Number of registered chords.
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Returns true if no chords are registered.
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Iterates over chords in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    /// Converts the registry back into a chord book.
    pub fn to_book(&self) -> ChordBook {
        ChordBook {
            chords: self
                .chords
                .iter()
                .map(|chord| ChordEntry {
                    name: chord.name().to_string(),
                    notes: chord.notes().to_vec(),
                })
                .collect(),
        }
    }
}

fn spelling_set(notes: &[Note]) -> BTreeSet<String> {
    notes.iter().map(|n| n.to_string()).collect()
}
