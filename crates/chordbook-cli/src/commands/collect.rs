//! Collect command implementation
//!
//! Builds a note collection from arguments, pops named notes, then prints
//! the collection contents or drains it.

use anyhow::Result;
use chordbook_theory::NoteCollection;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use crate::input::parse_notes;

/// JSON output for the collect command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollectOutput {
    /// Notes that were inserted.
    pub added: Vec<String>,
    /// Notes skipped because an equal note was already present.
    pub skipped: Vec<String>,
    /// Notes removed by `--pop`.
    pub popped: Vec<String>,
    /// `--pop` names that matched nothing.
    pub missing: Vec<String>,
    /// Rendered contents after popping (absent with `--extract`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Drained notes in insertion order (only with `--extract`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted: Option<Vec<String>>,
}

/// Run the collect command
///
/// # Arguments
/// * `raw_notes` - Notes to add, in order
/// * `pops` - Note names to pop after adding
/// * `extract` - Drain the collection instead of describing it
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    raw_notes: &[String],
    pops: &[String],
    extract: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let output = collect(raw_notes, pops, extract)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    for note in &output.skipped {
        println!("{} {} already collected", "Skipped:".yellow().bold(), note);
    }
    for note in &output.popped {
        println!("{} {}", "Popped:".cyan().bold(), note);
    }
    for name in &output.missing {
        println!("{} {}", "NOT FOUND".yellow().bold(), name);
    }
    if let Some(content) = &output.content {
        println!("{}", content);
    }
    if let Some(extracted) = &output.extracted {
        println!("{} [{}]", "Extracted:".green().bold(), extracted.join(", "));
    }

    Ok(ExitCode::SUCCESS)
}

pub(crate) fn collect(
    raw_notes: &[String],
    pops: &[String],
    extract: bool,
) -> Result<CollectOutput> {
    let mut collection = NoteCollection::new();
    let mut output = CollectOutput::default();

    for note in parse_notes(raw_notes)? {
        if collection.add(note) {
            output.added.push(note.to_string());
        } else {
            output.skipped.push(note.to_string());
        }
    }

    for name in pops {
        match collection.pop(name) {
            Some(note) => output.popped.push(note.to_string()),
            None => output.missing.push(name.clone()),
        }
    }

    if extract {
        output.extracted = Some(collection.extract().iter().map(|n| n.to_string()).collect());
    } else {
        output.content = Some(collection.describe());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_describe() {
        let output = collect(&args(&["Lb", "c#", "C#"]), &[], false).unwrap();
        assert_eq!(output.added, vec!["Lb", "C#"]);
        assert_eq!(output.skipped, vec!["C#"]);
        assert_eq!(output.content.as_deref(), Some("Notes:\n  * C#\n  * Lb"));
        assert_eq!(output.extracted, None);
    }

    #[test]
    fn test_collect_pop_and_extract() {
        let output = collect(&args(&["a", "C", "Eb"]), &args(&["eb", "Z"]), true).unwrap();
        assert_eq!(output.popped, vec!["Eb"]);
        assert_eq!(output.missing, vec!["Z"]);
        assert_eq!(output.extracted, Some(vec!["A".to_string(), "C".to_string()]));
        assert_eq!(output.content, None);
    }

    #[test]
    fn test_collect_empty() {
        let output = collect(&[], &[], false).unwrap();
        assert_eq!(output.content.as_deref(), Some("Notes:\n  Empty."));
    }

    #[test]
    fn test_collect_rejects_bad_note() {
        assert!(collect(&args(&["C", "C##"]), &[], false).is_err());
    }
}
