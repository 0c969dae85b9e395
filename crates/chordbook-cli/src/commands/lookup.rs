//! Lookup command implementation
//!
//! Loads a chord book and finds the chord made of the given notes.

use anyhow::{bail, Context, Result};
use chordbook_theory::{ChordRegistry, Note, MAX_CHORD_NOTES, MIN_CHORD_NOTES};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_book, parse_notes};

/// JSON output for the lookup command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupOutput {
    /// Whether a chord matched.
    pub found: bool,
    /// Query notes, normalized.
    pub query: Vec<String>,
    /// Name of the matching chord.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    /// Notes of the matching chord, in stored order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

/// Run the lookup command
///
/// # Arguments
/// * `book_path` - Path to the chord book JSON file
/// * `raw_notes` - Two or three query notes, in any order
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if a chord matched, 1 otherwise
pub fn run(book_path: &str, raw_notes: &[String], json_output: bool) -> Result<ExitCode> {
    if !json_output {
        println!("{} {}", "Loading:".cyan().bold(), book_path);
    }

    let registry = load_book(Path::new(book_path))?
        .to_registry()
        .with_context(|| format!("Failed to register chords from: {}", book_path))?;
    let notes = parse_notes(raw_notes)?;
    let output = lookup(&registry, &notes)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let (Some(chord), Some(notes)) = (&output.chord, &output.notes) {
        println!(
            "{} {} ({})",
            "SUCCESS".green().bold(),
            chord,
            notes.join(", ")
        );
    } else {
        println!(
            "{} no chord for {}",
            "NOT FOUND".yellow().bold(),
            output.query.join(", ")
        );
    }

    Ok(if output.found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub(crate) fn lookup(registry: &ChordRegistry, notes: &[Note]) -> Result<LookupOutput> {
    if !(MIN_CHORD_NOTES..=MAX_CHORD_NOTES).contains(&notes.len()) {
        bail!(
            "lookup needs {}-{} notes, got {}",
            MIN_CHORD_NOTES,
            MAX_CHORD_NOTES,
            notes.len()
        );
    }

    let found = registry.find(notes);
    Ok(LookupOutput {
        found: found.is_some(),
        query: notes.iter().map(|n| n.to_string()).collect(),
        chord: found.map(|c| c.name().to_string()),
        notes: found.map(|c| c.note_names()),
    })
}
