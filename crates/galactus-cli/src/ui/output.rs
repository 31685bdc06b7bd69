//! Console reporter.
//!
//! Implements the core [`Reporter`] so pruning progress is printed as it
//! happens. Paths are shown relative to the package being pruned.

use crossterm::style::Stylize;
use galactus_core::Reporter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Prints pruning progress to stdout.
#[derive(Debug, Default)]
pub struct Output {
    quiet: bool,
    dry_run: bool,
    root: OnceLock<PathBuf>,
}

impl Output {
    /// Create an output handle.
    pub fn new(quiet: bool, dry_run: bool) -> Self {
        Self {
            quiet,
            dry_run,
            root: OnceLock::new(),
        }
    }

    /// Prints an informational message to the console.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {msg}");
        }
    }

    /// Prints a success message to the console.
    pub fn success(&self, msg: &str) {
        println!("  {} {msg}", "✓".green());
    }

    fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        self.root
            .get()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
            .display()
    }
}

impl Reporter for Output {
    fn walking(&self, root: &Path) {
        let _ = self.root.set(root.to_path_buf());
        self.info(&format!("Walking {}", root.display()));
    }

    fn removing(&self, path: &Path) {
        if self.quiet {
            return;
        }
        let verb = if self.dry_run { "would remove" } else { "removing" };
        println!("  {} {}", verb.dim(), self.display_path(path));
    }

    fn summary(&self, removed: usize, kept: usize, elapsed_secs: f64) {
        let action = if self.dry_run { "Would remove" } else { "Removed" };
        let noun = if removed == 1 { "subtree" } else { "subtrees" };
        self.success(&format!(
            "{action} {removed} {noun}, kept {kept} modules ({elapsed_secs:.2}s)"
        ));
    }
}
