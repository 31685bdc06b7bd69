//! Dependency tree walking.
//!
//! A [`ModuleTreeProvider`] turns a package directory into the flat list of
//! installed [`Module`]s the pruner works from. [`Walker`] is the default
//! provider: it follows `package.json` manifests from the root package and
//! locates every dependency with node's directory lookup rules.

use crate::error::WalkError;
use crate::manifest::PackageManifest;
use async_trait::async_trait;
use galactus_schema::{DepType, Module, ModuleName, NODE_MODULES};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Source of the classified module list for one install tree.
#[async_trait]
pub trait ModuleTreeProvider: Send + Sync {
    /// Walk the whole dependency graph below the root module.
    ///
    /// Module paths must be absolute and spelled as
    /// [`root_module_path`](Self::root_module_path) joined with
    /// `node_modules` entries. The pruner lists directories starting from
    /// that root, so any other spelling of the same directory is not kept.
    async fn walk_tree(&self) -> Result<Vec<Module>, WalkError>;

    /// Directory of the root package.
    fn root_module_path(&self) -> &Path;
}

#[async_trait]
impl<T: ModuleTreeProvider + ?Sized> ModuleTreeProvider for Arc<T> {
    async fn walk_tree(&self) -> Result<Vec<Module>, WalkError> {
        (**self).walk_tree().await
    }

    fn root_module_path(&self) -> &Path {
        (**self).root_module_path()
    }
}

/// Walks an installed package tree by reading `package.json` manifests.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
}

/// Pending visit: module directory, classification, depth, and the name it
/// was required by.
type Visit = (PathBuf, DepType, usize, Option<ModuleName>);

impl Walker {
    /// Create a walker rooted at the package in `root`.
    ///
    /// A relative `root` is resolved against the current directory now.
    /// Symlinks are not resolved, so module paths keep the caller's spelling.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// Locate `name` as required from `from`, checking `node_modules` in
    /// `from` and each of its ancestors up to and including `root`.
    async fn resolve_module_path(
        root: &Path,
        from: &Path,
        name: &ModuleName,
    ) -> Result<Option<PathBuf>, WalkError> {
        let install_path = name.install_path();
        let mut current = from;

        loop {
            let candidate = current.join(NODE_MODULES).join(&install_path);
            if fs::try_exists(&candidate)
                .await
                .map_err(|e| WalkError::io(&candidate, e))?
            {
                return Ok(Some(candidate));
            }

            if current == root {
                return Ok(None);
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return Ok(None),
            }
        }
    }
}

#[async_trait]
impl ModuleTreeProvider for Walker {
    async fn walk_tree(&self) -> Result<Vec<Module>, WalkError> {
        let root = self.root.clone();
        tracing::debug!("Walking dependency tree from {}", root.display());

        let mut modules: Vec<Module> = Vec::new();
        let mut by_path: HashMap<PathBuf, usize> = HashMap::new();
        let mut manifests: HashMap<PathBuf, Arc<PackageManifest>> = HashMap::new();
        let mut queue: VecDeque<Visit> = VecDeque::from([(root.clone(), DepType::Root, 0, None)]);

        while let Some((path, dep_type, depth, required_as)) = queue.pop_front() {
            if let Some(&idx) = by_path.get(&path) {
                let existing = &mut modules[idx];
                if !dep_type.outranks(existing.dep_type) {
                    tracing::trace!("Skipping {} (already {})", existing.name, existing.dep_type);
                    continue;
                }
                tracing::trace!(
                    "Reclassifying {} from {} to {dep_type}",
                    existing.name,
                    existing.dep_type
                );
                existing.dep_type = dep_type;
                existing.depth = depth;
            }

            let manifest = match manifests.get(&path) {
                Some(manifest) => Arc::clone(manifest),
                None => {
                    let manifest = Arc::new(PackageManifest::load(&path).await?);
                    manifests.insert(path.clone(), Arc::clone(&manifest));
                    manifest
                }
            };

            if !by_path.contains_key(&path) {
                let name = manifest
                    .name
                    .as_deref()
                    .map(ModuleName::from)
                    .or(required_as)
                    .unwrap_or_else(|| {
                        ModuleName::from(
                            path.file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default(),
                        )
                    });
                tracing::debug!("Found {name} ({dep_type}) at {}", path.display());
                by_path.insert(path.clone(), modules.len());
                modules.push(Module::new(name, path.clone(), dep_type, depth));
            }

            for (name, kind) in manifest.edges(dep_type == DepType::Root) {
                let child_type = dep_type.child(kind);
                match Self::resolve_module_path(&root, &path, &name).await? {
                    Some(child) => queue.push_back((child, child_type, depth + 1, Some(name))),
                    None if child_type == DepType::Prod => {
                        return Err(WalkError::MissingDependency {
                            name: name.to_string(),
                            from: path,
                        });
                    }
                    None => tracing::debug!(
                        "Skipping missing {child_type} dependency {name} of {}",
                        path.display()
                    ),
                }
            }
        }

        tracing::debug!("Walked {} modules", modules.len());
        Ok(modules)
    }

    fn root_module_path(&self) -> &Path {
        &self.root
    }
}
