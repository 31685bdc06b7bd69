//! Reporter trait for dependency injection
//!
//! Lets the pruner report progress without being coupled to a specific
//! terminal front end.

use std::path::Path;

pub trait Reporter: Send + Sync {
    /// A tree walk is starting at `root`.
    fn walking(&self, root: &Path);

    /// `path` is about to be deleted (or would be, in a dry run).
    fn removing(&self, path: &Path);

    /// Final counts of a run.
    fn summary(&self, removed: usize, kept: usize, elapsed_secs: f64);
}

impl<T: Reporter + ?Sized> Reporter for std::sync::Arc<T> {
    fn walking(&self, root: &Path) {
        (**self).walking(root);
    }
    fn removing(&self, path: &Path) {
        (**self).removing(path);
    }
    fn summary(&self, removed: usize, kept: usize, elapsed_secs: f64) {
        (**self).summary(removed, kept, elapsed_secs);
    }
}

/// A no-op reporter for silent operations (e.g., library use, testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn walking(&self, _: &Path) {}
    fn removing(&self, _: &Path) {}
    fn summary(&self, _: usize, _: usize, _: f64) {}
}
