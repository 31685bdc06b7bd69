//! Kept command

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use galactus_core::{DestroyerOfModules, KeptModules};
use std::path::Path;

/// List the modules a prune of `dir` would keep
pub async fn kept(dir: &Path, relative: bool, json: bool) -> Result<()> {
    let destroyer = DestroyerOfModules::builder().root_directory(dir).build()?;
    let kept = destroyer
        .collect_kept_modules(relative)
        .await
        .with_context(|| format!("Failed to walk {}", dir.display()))?;

    if json {
        println!("{}", to_json(&kept)?);
        return Ok(());
    }

    for (path, module) in kept.sorted() {
        let shown = if path.as_os_str().is_empty() {
            ".".to_string()
        } else {
            path.display().to_string()
        };
        println!(
            "  {} {:<40} {}",
            format!("{:<14}", module.dep_type).dim(),
            module.name,
            shown
        );
    }
    println!();
    println!("  {} modules kept", kept.len());

    Ok(())
}

/// Serialize the index as a JSON object keyed by path.
fn to_json(kept: &KeptModules) -> Result<String> {
    let map: serde_json::Map<String, serde_json::Value> = kept
        .sorted()
        .into_iter()
        .map(|(path, module)| {
            serde_json::to_value(module).map(|value| (path.display().to_string(), value))
        })
        .collect::<Result<_, _>>()?;
    Ok(serde_json::to_string_pretty(&map)?)
}
