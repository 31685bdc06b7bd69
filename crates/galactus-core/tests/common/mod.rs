//! Shared fixture for galactus-core integration tests.

#![allow(dead_code)]

use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary copy of a small installed package tree:
///
/// ```text
/// package/
/// └── node_modules/
///     ├── test-prod/            (prod)
///     │   └── node_modules/
///     │       ├── dep-prod/     (prod of test-prod)
///     │       └── dep-dev/      (dev of test-prod, never walked)
///     ├── dep-optional/         (optional of test-prod, hoisted)
///     ├── test-optional/        (optional)
///     ├── test-dev/             (dev)
///     ├── dep-of-dev/           (prod of test-dev, hoisted)
///     ├── dep-dev-optional/     (optional of test-dev, hoisted)
///     └── @scoped/
///         ├── scoped-prod/      (prod)
///         ├── scoped-optional/  (optional)
///         └── scoped-dev/       (dev)
/// ```
pub struct Fixture {
    _temp_dir: TempDir,
    pub package_dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        // canonical so expectations compare equal to walker output
        let base = std::fs::canonicalize(temp_dir.path()).expect("failed to canonicalize");
        let package_dir = base.join("package");
        let nm = package_dir.join("node_modules");

        write_package(
            &package_dir,
            "package",
            &["test-prod", "@scoped/scoped-prod"],
            &["test-optional", "@scoped/scoped-optional"],
            &["test-dev", "@scoped/scoped-dev"],
        );

        let test_prod = nm.join("test-prod");
        write_package(&test_prod, "test-prod", &["dep-prod"], &["dep-optional"], &["dep-dev"]);
        write_package(&test_prod.join("node_modules/dep-prod"), "dep-prod", &[], &[], &[]);
        write_package(&test_prod.join("node_modules/dep-dev"), "dep-dev", &[], &[], &[]);
        write_package(&nm.join("dep-optional"), "dep-optional", &[], &[], &[]);

        write_package(&nm.join("test-optional"), "test-optional", &[], &[], &[]);
        write_package(
            &nm.join("test-dev"),
            "test-dev",
            &["dep-of-dev"],
            &["dep-dev-optional"],
            &[],
        );
        write_package(&nm.join("dep-of-dev"), "dep-of-dev", &[], &[], &[]);
        write_package(&nm.join("dep-dev-optional"), "dep-dev-optional", &[], &[], &[]);

        for name in ["scoped-prod", "scoped-optional", "scoped-dev"] {
            write_package(
                &nm.join("@scoped").join(name),
                &format!("@scoped/{name}"),
                &[],
                &[],
                &[],
            );
        }

        Self {
            _temp_dir: temp_dir,
            package_dir,
        }
    }

    pub fn node_modules(&self) -> PathBuf {
        self.package_dir.join("node_modules")
    }

    /// Whether an installed module (a directory with a manifest) exists at
    /// `relative`, below the package's `node_modules`.
    pub fn module_exists(&self, relative: &str) -> bool {
        self.node_modules().join(relative).join("package.json").exists()
    }

    /// Every path below the package directory, sorted.
    pub fn snapshot(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = walkdir::WalkDir::new(&self.package_dir)
            .into_iter()
            .filter_map(Result::ok)
            .map(|e| e.into_path())
            .collect();
        paths.sort();
        paths
    }
}

fn table(names: &[&str]) -> Value {
    let map: Map<String, Value> = names
        .iter()
        .map(|n| ((*n).to_string(), Value::from("^1.0.0")))
        .collect();
    Value::Object(map)
}

pub fn write_package(dir: &Path, name: &str, deps: &[&str], optional: &[&str], dev: &[&str]) {
    std::fs::create_dir_all(dir).expect("failed to create module dir");
    let manifest = json!({
        "name": name,
        "version": "1.0.0",
        "dependencies": table(deps),
        "optionalDependencies": table(optional),
        "devDependencies": table(dev),
    });
    std::fs::write(
        dir.join("package.json"),
        serde_json::to_string_pretty(&manifest).expect("failed to serialize manifest"),
    )
    .expect("failed to write package.json");
}
