//! Errors for tree walking and pruning

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a [`ModuleTreeProvider`](crate::walker::ModuleTreeProvider) to walk the tree.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Failed to locate module \"{name}\" from \"{}\". Either it was already removed or its installation failed",
        .from.display()
    )]
    MissingDependency { name: String, from: PathBuf },

    #[error("{0}")]
    Other(String),
}

impl WalkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<anyhow::Error> for WalkError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Errors surfaced by [`DestroyerOfModules`](crate::DestroyerOfModules).
#[derive(Error, Debug)]
pub enum DestroyError {
    #[error("Must either provide a root directory or a walker")]
    MissingSource,

    #[error("Failed to walk dependency tree: {0}")]
    Walk(#[from] WalkError),

    #[error("Failed to resolve root {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DestroyError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn remove(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            source,
        }
    }
}
