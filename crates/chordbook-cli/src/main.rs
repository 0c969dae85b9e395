//! Chordbook CLI - Command-line driver for note collections and chord lookup
//!
//! This binary exposes the chordbook theory library: note analysis, note
//! collections, and chord books queried by their notes.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use chordbook_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Note { notes, json } => commands::note::run(&notes, json),
        Commands::Collect {
            notes,
            pops,
            extract,
            json,
        } => commands::collect::run(&notes, &pops, extract, json),
        Commands::Lookup { book, notes, json } => commands::lookup::run(&book, &notes, json),
        Commands::Check { book, json } => commands::check::run(&book, json),
        Commands::Demo => commands::demo::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
