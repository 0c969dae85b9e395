//! Demo command implementation
//!
//! Walks through notes, collections, chords and the registry, printing each
//! step and its result.

use anyhow::{bail, Result};
use chordbook_theory::{Chord, ChordRegistry, Note, NoteCollection, TheoryError};
use colored::Colorize;
use std::process::ExitCode;

/// Run the demo command
///
/// # Returns
/// Exit code: 0 success
pub fn run() -> Result<ExitCode> {
    for (step, result) in walkthrough()? {
        println!("{} {}", step.cyan(), result);
    }
    println!("{} walkthrough complete", "SUCCESS".green().bold());
    Ok(ExitCode::SUCCESS)
}

fn lookup_label(found: Option<&Chord>) -> String {
    found.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Runs every step and returns `(step, result)` pairs.
///
/// Fails if a rejection the walkthrough relies on does not happen.
pub(crate) fn walkthrough() -> Result<Vec<(String, String)>> {
    let mut steps: Vec<(String, String)> = Vec::new();
    let mut step = |label: &str, result: String| steps.push((label.to_string(), result));

    let note_one = Note::parse("a")?;
    let note_two = Note::parse("C")?;
    let note_three = Note::parse("Eb")?;
    step("note('a')", note_one.to_string());
    step("note('Eb')", note_three.to_string());

    let mut collection = NoteCollection::new();
    collection.add(note_one);
    collection.add(note_two);
    step("describe", collection.describe());

    let extracted: Vec<String> = collection.extract().iter().map(|n| n.to_string()).collect();
    step("extract", format!("[{}]", extracted.join(", ")));
    step("describe", collection.describe());

    collection.add(note_one);
    collection.add(note_two);
    collection.add(note_three);
    step("pop('a') == A", (collection.pop("a") == Some(note_one)).to_string());
    step("pop('Eb') == Eb", (collection.pop("Eb") == Some(note_three)).to_string());

    let n = Note::parse;
    let mut chords = ChordRegistry::new();
    chords.add(Chord::new(n("A")?, n("B")?, "Amaj", Some(n("C")?))?)?;
    step("get(A, B, C)", lookup_label(chords.get(&n("A")?, &n("B")?, Some(&n("C")?))));
    step("get(B, C, A)", lookup_label(chords.get(&n("B")?, &n("C")?, Some(&n("A")?))));
    step("get(D, Z)", lookup_label(chords.get(&n("D")?, &n("Z")?, None)));
    chords.add(Chord::new(n("c#")?, n("d#")?, "c#5", None)?)?;
    step("get(C#, d#)", lookup_label(chords.get(&n("C#")?, &n("d#")?, None)));

    let mut chords = ChordRegistry::new();
    chords.add(Chord::new(n("A")?, n("C#")?, "Amaj", Some(n("E")?))?)?;
    chords.add(Chord::new(n("E")?, n("G")?, "Emin", Some(n("B")?))?)?;
    chords.add(Chord::new(n("E")?, n("B")?, "E5", None)?)?;
    step("get(e, b)", lookup_label(chords.get(&n("e")?, &n("b")?, None)));

    match Chord::new(n("E")?, n("A")?, "E", None) {
        Err(err @ TheoryError::DuplicateNoteNames { .. }) => {
            step("chord(E, A, 'E')", err.to_string())
        }
        other => bail!("expected duplicate note names, got {:?}", other),
    }

    match chords.add(Chord::new(n("E")?, n("B")?, "Emaj7add9", None)?) {
        Err(err @ TheoryError::ChordOverlap { .. }) => step("add(Emaj7add9)", err.to_string()),
        other => bail!("expected chord overlap, got {:?}", other),
    }

    Ok(steps)
}
