//! Fixture helpers for unit tests.

use galactus_schema::PACKAGE_JSON;
use serde_json::{Map, Value, json};
use std::path::Path;

fn table(names: &[&str]) -> Value {
    let map: Map<String, Value> = names
        .iter()
        .map(|n| ((*n).to_string(), Value::from("^1.0.0")))
        .collect();
    Value::Object(map)
}

/// Create `dir` with a `package.json` declaring the given dependency tables.
pub(crate) fn write_package(dir: &Path, name: &str, deps: &[&str], optional: &[&str], dev: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    let manifest = json!({
        "name": name,
        "version": "1.0.0",
        "dependencies": table(deps),
        "optionalDependencies": table(optional),
        "devDependencies": table(dev),
    });
    std::fs::write(
        dir.join(PACKAGE_JSON),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
}
