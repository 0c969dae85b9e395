//! Loading chord books and note arguments.

use anyhow::{Context, Result};
use chordbook_theory::{ChordBook, Note};
use std::fs;
use std::path::Path;

/// Reads and parses a chord book JSON file.
pub fn load_book(path: &Path) -> Result<ChordBook> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chord book: {}", path.display()))?;

    ChordBook::from_json(&content)
        .with_context(|| format!("Failed to parse chord book: {}", path.display()))
}

/// Parses every command-line note argument, failing on the first bad one.
pub fn parse_notes(raw: &[String]) -> Result<Vec<Note>> {
    raw.iter()
        .map(|s| Note::parse(s).with_context(|| format!("Invalid note argument: '{}'", s)))
        .collect()
}
