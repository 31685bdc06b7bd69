//! Shared types for galactus.
//!
//! These are produced by a dependency tree walker and consumed read-only by
//! the prune engine in `galactus-core`.

pub mod dep_type;
pub mod module;

// Re-exports
pub use dep_type::{DepType, DependencyKind};
pub use module::{Module, ModuleName};

/// Directory that holds a package's installed dependencies.
pub const NODE_MODULES: &str = "node_modules";

/// Manifest file read from every installed package.
pub const PACKAGE_JSON: &str = "package.json";

/// Prefix marking a scope directory (`@scope/name`).
pub const SCOPE_MARKER: char = '@';
