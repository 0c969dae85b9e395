//! Note command implementation
//!
//! Shows each note's spelling and pitch index, and groups enharmonic
//! spellings together.

use anyhow::Result;
use chordbook_theory::{Alteration, Note};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use crate::input::parse_notes;

/// One analysed note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteInfo {
    /// Argument as given.
    pub input: String,
    /// Normalized spelling.
    pub spelling: String,
    /// Uppercase letter.
    pub letter: char,
    /// Alteration.
    pub alteration: Alteration,
    /// Position on the 26-letter scale.
    pub pitch_index: f64,
}

/// JSON output for the note command.
#[derive(Debug, Clone, Serialize)]
pub struct NoteOutput {
    /// Per-argument analysis.
    pub notes: Vec<NoteInfo>,
    /// Distinct spellings sharing a pitch, only for pitches spelled more than one way.
    pub enharmonic_groups: Vec<Vec<String>>,
}

/// Run the note command
///
/// # Arguments
/// * `raw_notes` - Note arguments (e.g., "A#", "bb")
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(raw_notes: &[String], json_output: bool) -> Result<ExitCode> {
    let notes = parse_notes(raw_notes)?;
    let output = analyse(raw_notes, &notes);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    for info in &output.notes {
        println!(
            "{} {:<3} {} {}",
            "Note:".cyan().bold(),
            info.spelling,
            "pitch".dimmed(),
            info.pitch_index
        );
    }
    for group in &output.enharmonic_groups {
        println!("{} {}", "Enharmonic:".green().bold(), group.join(" = "));
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds the note report, grouping spellings by pitch in first-seen order.
pub(crate) fn analyse(raw_notes: &[String], notes: &[Note]) -> NoteOutput {
    let infos = raw_notes
        .iter()
        .zip(notes)
        .map(|(input, note)| NoteInfo {
            input: input.clone(),
            spelling: note.to_string(),
            letter: note.letter(),
            alteration: note.alteration(),
            pitch_index: note.pitch_index().as_f64(),
        })
        .collect();

    let mut groups: Vec<(Note, Vec<String>)> = Vec::new();
    for note in notes {
        let spelling = note.to_string();
        match groups.iter_mut().find(|(first, _)| first.is_enharmonic(note)) {
            Some((_, spellings)) => {
                if !spellings.contains(&spelling) {
                    spellings.push(spelling);
                }
            }
            None => groups.push((*note, vec![spelling])),
        }
    }

    NoteOutput {
        notes: infos,
        enharmonic_groups: groups
            .into_iter()
            .map(|(_, spellings)| spellings)
            .filter(|spellings| spellings.len() > 1)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_analyse_groups_enharmonics() {
        let raw = args(&["A#", "bb", "C", "ab", "Z#", "A#"]);
        let notes = parse_notes(&raw).unwrap();
        let output = analyse(&raw, &notes);

        assert_eq!(output.notes.len(), 6);
        assert_eq!(output.notes[1].spelling, "Bb");
        assert_eq!(output.notes[1].pitch_index, 0.5);
        assert_eq!(
            output.enharmonic_groups,
            vec![vec!["A#".to_string(), "Bb".to_string()], vec!["Ab".to_string(), "Z#".to_string()]]
        );
    }

    #[test]
    fn test_analyse_json_shape() {
        let raw = args(&["eb"]);
        let notes = parse_notes(&raw).unwrap();
        let value = serde_json::to_value(analyse(&raw, &notes)).unwrap();

        assert_eq!(value["notes"][0]["input"], "eb");
        assert_eq!(value["notes"][0]["spelling"], "Eb");
        assert_eq!(value["notes"][0]["alteration"], "flat");
        assert_eq!(value["notes"][0]["pitch_index"], 3.5);
        assert!(value["enharmonic_groups"].as_array().unwrap().is_empty());
    }
}
