//! CLI command implementations

pub mod check;
pub mod collect;
pub mod demo;
pub mod lookup;
pub mod note;
