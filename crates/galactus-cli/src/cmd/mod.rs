//! Subcommand implementations

pub mod completions;
pub mod kept;
pub mod prune;
