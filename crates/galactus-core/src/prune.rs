//! The prune engine.
//!
//! Walks the physical `node_modules` layout from a starting directory with
//! an explicit work list. Kept directories are descended into; every other
//! entry is marked for removal as a whole. Removal of the marked subtrees
//! runs afterwards with bounded concurrency, since no marked path can lie
//! inside another.

use crate::error::DestroyError;
use crate::kept::KeptModules;
use crate::reporter::Reporter;
use futures::stream::{self, StreamExt, TryStreamExt};
use galactus_schema::{NODE_MODULES, SCOPE_MARKER};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of pruning (or planning to prune) one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Removed subtrees, sorted.
    pub removed: Vec<PathBuf>,
    /// Number of kept directories that were visited.
    pub kept: usize,
}

/// Compute which subtrees below `path` would be removed, without touching
/// the filesystem.
///
/// `kept` must be keyed the way `path` is spelled (absolute keys for an
/// absolute `path`).
///
/// # Errors
///
/// Returns [`DestroyError::Read`] if a `node_modules` or scope directory
/// cannot be listed.
pub async fn plan_module(path: &Path, kept: &KeptModules) -> Result<PruneReport, DestroyError> {
    let mut pending = vec![path.to_path_buf()];
    let mut report = PruneReport::default();

    while let Some(current) = pending.pop() {
        if kept.contains(&current) {
            report.kept += 1;
            pending.extend(nested_modules(&current).await?);
        } else {
            tracing::trace!("Marking {} for removal", current.display());
            report.removed.push(current);
        }
    }

    report.removed.sort();
    Ok(report)
}

/// Prune the tree rooted at `path`: keep what `kept` lists and remove
/// everything else, recursing into kept modules' own `node_modules`.
///
/// A kept module without a `node_modules` directory is a no-op.
///
/// # Errors
///
/// Returns the first read or removal failure. Removals that already
/// happened are not undone.
pub async fn destroy_module(
    path: &Path,
    kept: &KeptModules,
    concurrency: usize,
    reporter: &dyn Reporter,
) -> Result<PruneReport, DestroyError> {
    let report = plan_module(path, kept).await?;
    remove_all(&report.removed, concurrency, reporter).await?;
    Ok(report)
}

/// Module directories installed below `module_dir/node_modules`, looking
/// through scope directories.
async fn nested_modules(module_dir: &Path) -> Result<Vec<PathBuf>, DestroyError> {
    let node_modules = module_dir.join(NODE_MODULES);
    let exists = fs::try_exists(&node_modules)
        .await
        .map_err(|e| DestroyError::read(&node_modules, e))?;
    if !exists {
        return Ok(Vec::new());
    }

    let mut modules = Vec::new();
    for entry in list_dir(&node_modules).await? {
        let is_scope = entry
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with(SCOPE_MARKER));
        if is_scope {
            modules.extend(list_dir(&entry).await?);
        } else {
            modules.push(entry);
        }
    }
    Ok(modules)
}

async fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, DestroyError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| DestroyError::read(dir, e))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DestroyError::read(dir, e))?
    {
        paths.push(entry.path());
    }
    Ok(paths)
}

/// Remove every path in `paths`, at most `concurrency` at a time.
///
/// # Errors
///
/// Returns the first removal failure.
pub async fn remove_all(
    paths: &[PathBuf],
    concurrency: usize,
    reporter: &dyn Reporter,
) -> Result<(), DestroyError> {
    stream::iter(paths)
        .map(move |path| async move {
            reporter.removing(path);
            remove_path(path).await
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect::<()>()
        .await
}

/// Remove a directory tree, file, or symlink. A path that is already gone
/// counts as removed; symlinks are unlinked, never followed.
///
/// # Errors
///
/// Returns [`DestroyError::Remove`] if the path exists but cannot be deleted.
pub async fn remove_path(path: &Path) -> Result<(), DestroyError> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(DestroyError::remove(path, e)),
    };

    tracing::debug!("Removing {}", path.display());
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match result {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(DestroyError::remove(path, e)),
        _ => Ok(()),
    }
}
