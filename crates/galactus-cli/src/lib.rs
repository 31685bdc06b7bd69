//! galactus - prune a `node_modules` tree
//!
//! Walks the dependency graph of an installed package and deletes every
//! module that is only needed for development, keeping production and
//! optional dependencies at every depth.
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]

pub mod cmd;
pub mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "galactus")]
#[command(author, version, about = "galactus - prune development dependencies out of node_modules")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove development dependencies from an installed package tree
    Prune {
        /// Package directory containing node_modules
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Show what would be removed without removing anything
        #[arg(long)]
        dry_run: bool,
        /// Keep development dependencies too (only prunes unreachable modules)
        #[arg(long)]
        keep_dev: bool,
        /// Maximum number of subtrees removed at once
        #[arg(long, env = "GALACTUS_CONCURRENCY")]
        concurrency: Option<usize>,
    },
    /// List the modules a prune would keep
    Kept {
        /// Package directory containing node_modules
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Print paths relative to the package directory
        #[arg(long)]
        relative: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
