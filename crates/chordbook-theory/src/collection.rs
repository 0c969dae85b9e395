//! Ordered, deduplicating note collection.

use crate::note::Note;

/// Header line of [`NoteCollection::describe`].
pub const CONTENT_HEADER: &str = "Notes:";

/// Body line of [`NoteCollection::describe`] when nothing is stored.
pub const EMPTY_CONTENT: &str = "  Empty.";

/// Notes kept in insertion order, at most one per equality class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `note` unless an equal note is already present.
    ///
    /// Returns true if the note was inserted.
    pub fn add(&mut self, note: Note) -> bool {
        if self.notes.contains(&note) {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Removes and returns the first note equal to the note named `name`.
    ///
    /// A name that does not parse as a note matches nothing. The collection
    /// is left untouched when nothing matches.
    pub fn pop(&mut self, name: &str) -> Option<Note> {
        let probe = Note::parse(name).ok()?;
        let position = self.notes.iter().position(|n| *n == probe)?;
        Some(self.notes.remove(position))
    }

    /// Drains every note in insertion order, leaving the collection empty.
    pub fn extract(&mut self) -> Vec<Note> {
        std::mem::take(&mut self.notes)
    }

    /// Renders the notes sorted by letter then alteration.
    ///
    /// ```
    /// use chordbook_theory::{Note, NoteCollection};
    ///
    /// let mut collection = NoteCollection::new();
    /// collection.add(Note::parse("C#").unwrap());
    /// collection.add(Note::parse("Lb").unwrap());
    /// assert_eq!(collection.describe(), "Notes:\n  * C#\n  * Lb");
    /// ```
    pub fn describe(&self) -> String {
        let mut sorted = self.notes.clone();
        sorted.sort_by_key(|n| n.spelling_key());

        let mut unique: Vec<Note> = Vec::with_capacity(sorted.len());
        for note in sorted {
            if !unique.contains(&note) {
                unique.push(note);
            }
        }

        if unique.is_empty() {
            return format!("{}\n{}", CONTENT_HEADER, EMPTY_CONTENT);
        }

        let mut content = String::from(CONTENT_HEADER);
        for note in &unique {
            content.push_str("\n  * ");
            content.push_str(&note.to_string());
        }
        content
    }

    /// Returns true if a note equal to `note` is stored.
    pub fn contains(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if no notes are stored.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates over the notes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }
}

impl FromIterator<Note> for NoteCollection {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut collection = NoteCollection::new();
        for note in iter {
            collection.add(note);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(raw: &str) -> Note {
        Note::parse(raw).unwrap()
    }

    fn spelled(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut collection = NoteCollection::new();
        assert!(collection.add(note("A")));
        assert!(!collection.add(note("a")));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_add_keeps_enharmonic_spellings_apart() {
        let mut collection = NoteCollection::new();
        collection.add(note("A#"));
        collection.add(note("Bb"));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_pop_does_not_cross_enharmonic_spellings() {
        let mut collection = NoteCollection::new();
        collection.add(note("A#"));
        collection.add(note("Bb"));

        assert_eq!(collection.pop("Bb"), Some(note("Bb")));
        assert_eq!(collection.pop("Bb"), None);
        assert_eq!(collection.pop("F#"), None);
        assert_eq!(spelled(&collection.extract()), vec!["A#"]);
    }

    #[test]
    fn test_extract_drains_once() {
        let mut collection = NoteCollection::new();
        collection.add(note("A"));
        collection.add(note("C"));

        assert_eq!(spelled(&collection.extract()), vec!["A", "C"]);
        assert!(collection.extract().is_empty());
        assert_eq!(collection, NoteCollection::new());
    }

    #[test]
    fn test_pop_by_name() {
        let mut collection = NoteCollection::new();
        collection.add(note("a"));
        collection.add(note("C"));
        collection.add(note("Eb"));

        assert_eq!(collection.pop("C"), Some(note("C")));
        assert_eq!(collection.pop("Eb"), Some(note("Eb")));
        assert_eq!(spelled(&collection.extract()), vec!["A"]);
    }

    #[test]
    fn test_pop_missing_leaves_collection() {
        let mut collection = NoteCollection::new();
        collection.add(note("A"));
        assert_eq!(collection.pop("Z"), None);
        assert_eq!(collection.pop("not a note"), None);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_describe_sorted() {
        let mut collection = NoteCollection::new();
        for raw in ["Lb", "C", "C#", "A"] {
            collection.add(note(raw));
        }
        assert_eq!(collection.describe(), "Notes:\n  * A\n  * C\n  * C#\n  * Lb");
    }

    #[test]
    fn test_describe_empty() {
        let collection = NoteCollection::new();
        assert_eq!(collection.describe(), "Notes:\n  Empty.");
    }

    #[test]
    fn test_from_iterator_deduplicates() {
        let collection: NoteCollection = ["G", "g", "F#"].iter().map(|n| note(n)).collect();
        assert_eq!(collection.len(), 2);
        assert!(collection.contains(&note("F#")));
    }
}
