//! Core library for galactus.
//!
//! Prunes a `node_modules` install tree: a [`ModuleTreeProvider`] lists and
//! classifies the installed modules, a [`KeepPolicy`] picks the survivors,
//! and the prune engine removes every directory that did not survive while
//! descending into the nested `node_modules` of those that did.

pub mod destroyer;
pub mod error;
pub mod kept;
pub mod manifest;
pub mod policy;
pub mod prune;
pub mod reporter;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use destroyer::{DestroyerBuilder, DestroyerOfModules, TreeSource};
pub use error::{DestroyError, WalkError};
pub use kept::KeptModules;
pub use policy::{DefaultKeepPolicy, KeepPolicy};
pub use prune::PruneReport;
pub use reporter::{NullReporter, Reporter};
pub use walker::{ModuleTreeProvider, Walker};

pub use galactus_schema::{DepType, Module, ModuleName};
