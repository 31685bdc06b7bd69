//! Dependency classification of installed modules.

use serde::{Deserialize, Serialize};

/// How a module is reached from the root of the dependency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepType {
    /// Reachable from the root through production edges only.
    Prod,
    /// Reachable only through the root's `devDependencies`.
    Dev,
    /// Reachable through an optional edge from production code.
    Optional,
    /// Optional dependency of a development dependency.
    DevOptional,
    /// The root package itself.
    Root,
}

/// The manifest table a dependency edge was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
    /// `dependencies`
    Dependencies,
    /// `optionalDependencies`
    OptionalDependencies,
    /// `devDependencies`
    DevDependencies,
}

impl DepType {
    /// Whether this module only exists for development.
    pub fn is_dev(self) -> bool {
        matches!(self, Self::Dev | Self::DevOptional)
    }

    /// Whether a missing install of this module is tolerated.
    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::DevOptional)
    }

    /// Classification of a dependency reached from a module of this class
    /// through an edge declared in `edge`.
    pub fn child(self, edge: DependencyKind) -> Self {
        match self {
            Self::Root | Self::Prod => match edge {
                DependencyKind::Dependencies => Self::Prod,
                DependencyKind::OptionalDependencies => Self::Optional,
                DependencyKind::DevDependencies => Self::Dev,
            },
            Self::Optional => match edge {
                DependencyKind::DevDependencies => Self::DevOptional,
                _ => Self::Optional,
            },
            Self::Dev => match edge {
                DependencyKind::OptionalDependencies => Self::DevOptional,
                _ => Self::Dev,
            },
            Self::DevOptional => Self::DevOptional,
        }
    }

    /// Whether a module already classified as `existing` must be
    /// reclassified as `self` when reached again through another path.
    pub fn outranks(self, existing: Self) -> bool {
        self.rank() > existing.rank()
    }

    fn rank(self) -> u8 {
        match self {
            Self::DevOptional => 0,
            Self::Dev => 1,
            Self::Optional => 2,
            Self::Prod => 3,
            Self::Root => 4,
        }
    }

    /// Short lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "prod",
            Self::Dev => "dev",
            Self::Optional => "optional",
            Self::DevOptional => "dev-optional",
            Self::Root => "root",
        }
    }
}

impl std::fmt::Display for DepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl DependencyKind {
    /// Key of the manifest table this kind is read from.
    pub fn manifest_key(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::OptionalDependencies => "optionalDependencies",
            Self::DevDependencies => "devDependencies",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_classes() {
        assert!(DepType::Dev.is_dev());
        assert!(DepType::DevOptional.is_dev());
        assert!(!DepType::Prod.is_dev());
        assert!(!DepType::Optional.is_dev());
        assert!(!DepType::Root.is_dev());
    }

    #[test]
    fn test_root_children_take_edge_class() {
        assert_eq!(
            DepType::Root.child(DependencyKind::Dependencies),
            DepType::Prod
        );
        assert_eq!(
            DepType::Root.child(DependencyKind::OptionalDependencies),
            DepType::Optional
        );
        assert_eq!(
            DepType::Root.child(DependencyKind::DevDependencies),
            DepType::Dev
        );
    }

    #[test]
    fn test_dev_subtree_stays_dev() {
        assert_eq!(DepType::Dev.child(DependencyKind::Dependencies), DepType::Dev);
        assert_eq!(
            DepType::Dev.child(DependencyKind::OptionalDependencies),
            DepType::DevOptional
        );
        assert_eq!(
            DepType::DevOptional.child(DependencyKind::Dependencies),
            DepType::DevOptional
        );
        assert_eq!(
            DepType::Optional.child(DependencyKind::Dependencies),
            DepType::Optional
        );
    }

    #[test]
    fn test_outranks() {
        assert!(DepType::Prod.outranks(DepType::Dev));
        assert!(DepType::Optional.outranks(DepType::Dev));
        assert!(DepType::Dev.outranks(DepType::DevOptional));
        assert!(DepType::Root.outranks(DepType::Prod));
        assert!(!DepType::Dev.outranks(DepType::Optional));
        assert!(!DepType::Prod.outranks(DepType::Prod));
        assert!(!DepType::Prod.outranks(DepType::Root));
    }

    #[test]
    fn test_serialized_labels_match_display() {
        let json = serde_json::to_string(&DepType::DevOptional).unwrap();
        assert_eq!(json, "\"dev-optional\"");
        assert_eq!(DepType::DevOptional.to_string(), "dev-optional");
    }
}
