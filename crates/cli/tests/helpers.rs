use std::fs;
use std::path::Path;

use godi::resolve_root;
use tempfile::tempdir;

#[test]
fn resolve_root_canonicalizes_existing_dirs() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");

    let resolved = resolve_root(nested.to_str().expect("utf8")).expect("resolve");
    assert_eq!(resolved, nested.canonicalize().expect("canonicalize"));
}

#[test]
fn resolve_root_keeps_missing_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("does-not-exist");
    let resolved = resolve_root(missing.to_str().expect("utf8")).expect("resolve");
    assert_eq!(resolved, missing);
}

#[test]
fn resolve_root_joins_missing_relative_paths_onto_cwd() {
    let resolved = resolve_root("godi-missing-relative-root").expect("resolve");
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with(Path::new("godi-missing-relative-root")));
}
