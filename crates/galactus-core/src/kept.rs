//! The kept-module index.
//!
//! Built once per run from a full tree walk. A path present in the index is
//! preserved and pruned recursively; any path missing from it is removed
//! together with everything below it.

use crate::error::DestroyError;
use crate::policy::{KeepPolicy, should_keep_module};
use crate::walker::ModuleTreeProvider;
use galactus_schema::Module;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Modules that survive pruning, keyed by install directory.
#[derive(Debug, Clone, Default)]
pub struct KeptModules {
    modules: HashMap<PathBuf, Module>,
}

impl KeptModules {
    /// Keep every module of `modules` that `policy` accepts, keyed by its path.
    pub fn from_modules(modules: impl IntoIterator<Item = Module>, policy: &dyn KeepPolicy) -> Self {
        modules
            .into_iter()
            .filter(|module| {
                let keep = should_keep_module(policy, module);
                tracing::debug!(
                    "{} {} ({})",
                    if keep { "Keeping" } else { "Dropping" },
                    module.name,
                    module.dep_type
                );
                keep
            })
            .map(|module| (module.path.clone(), module))
            .collect()
    }

    /// Rewrite every key relative to `root`.
    ///
    /// Keys outside `root` are left unchanged. The root itself maps to the
    /// empty path.
    pub fn relative_to(self, root: &Path) -> Self {
        self.modules
            .into_iter()
            .map(|(path, module)| match path.strip_prefix(root) {
                Ok(relative) => (relative.to_path_buf(), module),
                Err(_) => (path, module),
            })
            .collect()
    }

    /// Look up the module kept at `path`.
    pub fn get(&self, path: &Path) -> Option<&Module> {
        self.modules.get(path)
    }

    /// Whether `path` is kept.
    pub fn contains(&self, path: &Path) -> bool {
        self.modules.contains_key(path)
    }

    /// Number of kept modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether nothing is kept, not even the root.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate over `(path, module)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Module)> {
        self.modules.iter().map(|(path, module)| (path.as_path(), module))
    }

    /// Entries sorted by path, for stable output.
    pub fn sorted(&self) -> Vec<(&Path, &Module)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(PathBuf, Module)> for KeptModules {
    fn from_iter<I: IntoIterator<Item = (PathBuf, Module)>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for KeptModules {
    type Item = (PathBuf, Module);
    type IntoIter = std::collections::hash_map::IntoIter<PathBuf, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.into_iter()
    }
}

/// Walk the tree once and index every module `policy` keeps.
///
/// With `relative_paths`, keys are made relative to the provider's root as
/// it spells it. Keys still absolute after that are tried against the
/// canonicalized root, so a provider rooted at `.` or at a symlink that
/// reports resolved paths yields the same keys.
///
/// # Errors
///
/// Returns [`DestroyError::Walk`] if the provider fails and
/// [`DestroyError::Root`] if the root cannot be canonicalized.
pub async fn collect_kept_modules(
    provider: &dyn ModuleTreeProvider,
    policy: &dyn KeepPolicy,
    relative_paths: bool,
) -> Result<KeptModules, DestroyError> {
    let modules = provider.walk_tree().await?;
    let kept = KeptModules::from_modules(modules, policy);

    if !relative_paths {
        return Ok(kept);
    }

    let root = provider.root_module_path();
    let canonical = fs::canonicalize(root)
        .await
        .map_err(|source| DestroyError::Root {
            path: root.to_path_buf(),
            source,
        })?;

    let kept = kept.relative_to(root);
    if canonical.as_path() == root {
        return Ok(kept);
    }
    Ok(kept.relative_to(&canonical))
}
