//! CLI argument definitions for the chordbook command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// Chordbook - note collections and chord lookup with enharmonic spelling
#[derive(Parser)]
#[command(name = "chordbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show pitch indices and enharmonic groups for notes
    Note {
        /// Notes to analyse (e.g., A#, bb, C)
        #[arg(required = true)]
        notes: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Build a note collection, pop notes, and print its contents
    Collect {
        /// Notes to add, in order
        notes: Vec<String>,

        /// Note name to pop after adding (repeatable)
        #[arg(long = "pop", value_name = "NAME")]
        pops: Vec<String>,

        /// Drain the collection in insertion order instead of describing it
        #[arg(long)]
        extract: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Find the chord made of 2-3 notes in a chord book
    Lookup {
        /// Path to the chord book JSON file
        #[arg(short, long)]
        book: String,

        /// Two or three notes, in any order
        #[arg(num_args = 2..=3, required = true)]
        notes: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check that every chord in a chord book can be registered
    Check {
        /// Path to the chord book JSON file
        #[arg(short, long)]
        book: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run a walkthrough of notes, collections, and chord lookup
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_lookup() {
        let cli = Cli::try_parse_from([
            "chordbook", "lookup", "--book", "chords.json", "B", "C", "A",
        ])
        .unwrap();
        match cli.command {
            Commands::Lookup { book, notes, json } => {
                assert_eq!(book, "chords.json");
                assert_eq!(notes, vec!["B", "C", "A"]);
                assert!(!json);
            }
            _ => panic!("expected lookup command"),
        }
    }

    #[test]
    fn test_cli_rejects_lookup_with_one_note() {
        assert!(Cli::try_parse_from(["chordbook", "lookup", "-b", "chords.json", "A"]).is_err());
    }

    #[test]
    fn test_cli_rejects_lookup_with_four_notes() {
        assert!(Cli::try_parse_from([
            "chordbook", "lookup", "-b", "chords.json", "A", "B", "C", "D"
        ])
        .is_err());
    }

    #[test]
    fn test_cli_parses_collect_with_pops() {
        let cli = Cli::try_parse_from([
            "chordbook", "collect", "a", "C", "Eb", "--pop", "a", "--pop", "Eb", "--extract",
        ])
        .unwrap();
        match cli.command {
            Commands::Collect {
                notes,
                pops,
                extract,
                json,
            } => {
                assert_eq!(notes, vec!["a", "C", "Eb"]);
                assert_eq!(pops, vec!["a", "Eb"]);
                assert!(extract);
                assert!(!json);
            }
            _ => panic!("expected collect command"),
        }
    }

    #[test]
    fn test_cli_parses_check_json() {
        let cli =
            Cli::try_parse_from(["chordbook", "check", "--book", "b.json", "--json"]).unwrap();
        match cli.command {
            Commands::Check { book, json } => {
                assert_eq!(book, "b.json");
                assert!(json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_cli_requires_notes_for_note_command() {
        assert!(Cli::try_parse_from(["chordbook", "note"]).is_err());
    }

    #[test]
    fn test_cli_parses_demo() {
        let cli = Cli::try_parse_from(["chordbook", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::Demo));
    }
}
