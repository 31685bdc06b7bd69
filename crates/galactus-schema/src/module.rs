//! Installed module records.

use crate::dep_type::DepType;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::path::{Path, PathBuf};

/// A package name as declared in a manifest, e.g. `lodash` or `@babel/core`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Wrap a raw package name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scope of a scoped package (`@babel` for `@babel/core`).
    pub fn scope(&self) -> Option<&str> {
        if !self.0.starts_with(crate::SCOPE_MARKER) {
            return None;
        }
        self.0.split_once('/').map(|(scope, _)| scope)
    }

    /// Relative install location below a `node_modules` directory.
    ///
    /// Scoped names map onto two directory levels.
    pub fn install_path(&self) -> PathBuf {
        self.0.split('/').collect()
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl std::ops::Deref for ModuleName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModuleName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ModuleName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for ModuleName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ModuleName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One installed package directory together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Package name from the module's manifest.
    pub name: ModuleName,
    /// Absolute path of the install directory, spelled from the root the
    /// tree was walked from.
    pub path: PathBuf,
    /// How the module is reached from the root.
    pub dep_type: DepType,
    /// Dependency hops from the root module (the root is 0), counted along
    /// the path that gave the module its classification.
    pub depth: usize,
}

impl Module {
    /// Create a module record.
    pub fn new(
        name: impl Into<ModuleName>,
        path: impl Into<PathBuf>,
        dep_type: DepType,
        depth: usize,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            dep_type,
            depth,
        }
    }

    /// Whether the module only exists for development.
    pub fn is_dev_dependency(&self) -> bool {
        self.dep_type.is_dev()
    }

    /// Directory holding this module's own installed dependencies.
    pub fn node_modules_path(&self) -> PathBuf {
        self.path.join(crate::NODE_MODULES)
    }

    /// Install directory as a borrowed path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
