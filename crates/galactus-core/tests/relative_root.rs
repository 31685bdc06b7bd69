//! A relative root directory must yield the same relative keys as an
//! absolute one. Changes the process working directory, so it lives in its
//! own test binary.

mod common;

use common::Fixture;
use galactus_core::DestroyerOfModules;
use std::path::Path;

#[tokio::test]
async fn test_relative_paths_with_relative_root_directory() {
    let fixture = Fixture::new();

    let absolute = DestroyerOfModules::builder()
        .root_directory(&fixture.package_dir)
        .build()
        .unwrap()
        .collect_kept_modules(true)
        .await
        .unwrap();

    let old_current_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(&fixture.package_dir).unwrap();
    let relative = DestroyerOfModules::builder()
        .root_directory(".")
        .build()
        .unwrap()
        .collect_kept_modules(true)
        .await;
    std::env::set_current_dir(old_current_dir).unwrap();
    let relative = relative.unwrap();

    assert!(relative.contains(Path::new("node_modules/test-prod/node_modules/dep-prod")));

    let mut absolute_keys: Vec<_> = absolute.iter().map(|(p, _)| p.to_path_buf()).collect();
    let mut relative_keys: Vec<_> = relative.iter().map(|(p, _)| p.to_path_buf()).collect();
    absolute_keys.sort();
    relative_keys.sort();
    assert_eq!(relative_keys, absolute_keys);
}
