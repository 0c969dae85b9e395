//! Check command implementation
//!
//! Validates every entry of a chord book and reports each rejection.

use anyhow::Result;
use chordbook_theory::BookReport;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_book;

/// JSON output for the check command.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    /// Whether every entry registered.
    pub success: bool,
    /// Path to the checked book.
    pub book_path: String,
    /// Per-entry results.
    pub report: BookReport,
}

/// Run the check command
///
/// # Arguments
/// * `book_path` - Path to the chord book JSON file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every chord registered, 1 otherwise
pub fn run(book_path: &str, json_output: bool) -> Result<ExitCode> {
    let report = load_book(Path::new(book_path))?.check();
    let success = report.is_ok();

    if json_output {
        let output = CheckOutput {
            success,
            book_path: book_path.to_string(),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Checking:".cyan().bold(), book_path);
        for issue in &report.issues {
            eprintln!(
                "  {} [{}] #{} '{}': {}",
                "ERROR".red().bold(),
                issue.code,
                issue.index,
                issue.chord,
                issue.message
            );
        }
        if success {
            println!(
                "{} {} chord(s) registered",
                "SUCCESS".green().bold(),
                report.accepted
            );
        } else {
            println!(
                "{} {} chord(s) registered, {} rejected",
                "FAILED".red().bold(),
                report.accepted,
                report.issues.len()
            );
        }
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
