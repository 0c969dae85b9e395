//! Chordbook CLI library.
//!
//! Command implementations and chord-book loading for the `chordbook`
//! binary. Every command is a thin driver over `chordbook_theory`.

pub mod commands;
pub mod input;
