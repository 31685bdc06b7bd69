//! `package.json` parsing.
//!
//! Only the fields that shape the installed dependency graph are read; every
//! other key in the manifest is ignored.

use crate::error::WalkError;
use galactus_schema::{DependencyKind, ModuleName, PACKAGE_JSON};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// The dependency-related subset of a `package.json` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Declared package name.
    #[serde(default)]
    pub name: Option<String>,
    /// Runtime dependencies.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    /// Dependencies whose install may fail without failing the package.
    #[serde(default)]
    pub optional_dependencies: BTreeMap<String, String>,
    /// Dependencies needed only to develop the package.
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parse a manifest from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or a dependency table
    /// is not a string-to-string map.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Read and parse `<module_dir>/package.json`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Io`] if the file cannot be read and
    /// [`WalkError::Manifest`] if it cannot be parsed.
    pub async fn load(module_dir: &Path) -> Result<Self, WalkError> {
        let path = module_dir.join(PACKAGE_JSON);
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| WalkError::io(&path, e))?;

        Self::parse(&content).map_err(|source| WalkError::Manifest { path, source })
    }

    /// Every declared dependency edge, tagged with the table it came from.
    ///
    /// A name listed in both `dependencies` and `optionalDependencies` is
    /// reported once, as optional. `devDependencies` are only included when
    /// `include_dev` is set.
    pub fn edges(&self, include_dev: bool) -> Vec<(ModuleName, DependencyKind)> {
        let mut edges: Vec<_> = self
            .dependencies
            .keys()
            .filter(|name| !self.optional_dependencies.contains_key(*name))
            .map(|name| (ModuleName::from(name.as_str()), DependencyKind::Dependencies))
            .collect();

        edges.extend(self.optional_dependencies.keys().map(|name| {
            (
                ModuleName::from(name.as_str()),
                DependencyKind::OptionalDependencies,
            )
        }));

        if include_dev {
            edges.extend(
                self.dev_dependencies
                    .keys()
                    .map(|name| (ModuleName::from(name.as_str()), DependencyKind::DevDependencies)),
            );
        }

        edges
    }
}
