//! A single spelled note.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{letter_position, Alteration, PitchIndex};

/// A note letter with an optional alteration.
///
/// Notes are immutable. Equality compares pitch indices and requires the
/// other note's alteration to be contained in this note's alteration. Two
/// notes at the same pitch with different alterations are always a sharp and
/// a flat (e.g., `A#` and `Bb`), and neither contains the other, so in
/// practice two notes are equal exactly when they are spelled the same.
/// A [`NoteCollection`](crate::NoteCollection) therefore keeps `A#` and `Bb`
/// as separate entries, and popping `"Bb"` never removes a stored `A#`.
/// [`Note::is_enharmonic`] compares pitch alone.
///
/// The hash is derived from the pitch index only, which keeps it consistent
/// with equality.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: char,
    alteration: Alteration,
}

impl Note {
    /// Creates a note from a letter and alteration.
    ///
    /// The letter is uppercased; anything outside `A`..=`Z` is rejected.
    pub fn new(letter: char, alteration: Alteration) -> Result<Self, TheoryError> {
        let letter = letter.to_ascii_uppercase();
        if letter_position(letter).is_none() {
            return Err(TheoryError::invalid(format!(
                "note letter must be A-Z, got '{}'",
                letter
            )));
        }
        Ok(Self { letter, alteration })
    }

    /// Parses a raw note string such as `"a"`, `"C#"` or `"Eb"`.
    ///
    /// The first character becomes the uppercased letter. The remainder is
    /// lowercased and must be empty, `#` or `b`.
    ///
    /// # Examples
    /// ```
    /// use chordbook_theory::Note;
    ///
    /// let note = Note::parse("c#").unwrap();
    /// assert_eq!(note.to_string(), "C#");
    /// assert_eq!(Note::parse("EB").unwrap().to_string(), "Eb");
    /// assert!(Note::parse("H##").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TheoryError> {
        let mut chars = raw.chars();
        let Some(first) = chars.next() else {
            return Err(TheoryError::invalid("note name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(TheoryError::invalid(format!(
                "note '{}' must start with a letter",
                raw
            )));
        }

        let suffix = chars.as_str().to_lowercase();
        let alteration = Alteration::from_suffix(&suffix).ok_or_else(|| {
            TheoryError::invalid(format!(
                "note '{}' has unsupported alteration '{}' (expected '#' or 'b')",
                raw, suffix
            ))
        })?;

        Self::new(first, alteration)
    }

    /// The uppercase note letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The note's alteration.
    pub fn alteration(&self) -> Alteration {
        self.alteration
    }

    /// Position of this note on the cyclic scale.
    pub fn pitch_index(&self) -> PitchIndex {
        PitchIndex::from_position(self.letter as u8 - b'A', self.alteration)
    }

    /// Returns true if both notes sit at the same pitch, however spelled.
    pub fn is_enharmonic(&self, other: &Note) -> bool {
        self.pitch_index() == other.pitch_index()
    }

    /// Sort key: letter, then alteration.
    pub(crate) fn spelling_key(&self) -> (char, Alteration) {
        (self.letter, self.alteration)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.pitch_index() == other.pitch_index() && self.alteration.contains(other.alteration)
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pitch_index().hash(state);
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.spelling_key().cmp(&other.spelling_key())
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.letter, self.alteration)
    }
}

impl std::str::FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Note::parse(&value)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
