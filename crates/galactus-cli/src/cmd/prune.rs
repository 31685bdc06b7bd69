//! Prune command

use crate::ui::Output;
use anyhow::{Context, Result};
use galactus_core::{DestroyerOfModules, Module};
use std::path::Path;
use std::sync::Arc;

/// Remove development dependencies below `dir`
pub async fn prune(
    dir: &Path,
    keep_dev: bool,
    concurrency: Option<usize>,
    dry_run: bool,
    quiet: bool,
) -> Result<()> {
    let output = Arc::new(Output::new(quiet, dry_run));

    let mut builder = DestroyerOfModules::builder()
        .root_directory(dir)
        .reporter(output.clone());
    if keep_dev {
        builder = builder.should_keep_module_test(|_: &Module, _: bool| true);
    }
    if let Some(concurrency) = concurrency {
        builder = builder.concurrency(concurrency);
    }
    let destroyer = builder.build()?;

    let report = if dry_run {
        destroyer.plan().await
    } else {
        destroyer.destroy().await
    }
    .with_context(|| format!("Failed to prune {}", dir.display()))?;

    if report.removed.is_empty() {
        output.info("Nothing to prune.");
    }

    Ok(())
}
