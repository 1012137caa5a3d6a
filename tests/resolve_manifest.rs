//! Integration tests resolving manifest trees from local storage.

use std::fs;
use tempfile::TempDir;
use tocmount::{Entry, ManifestFetcher, ResolveError, Resolver};

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn resolves_nested_manifests_from_disk() {
    let dir = TempDir::new().unwrap();
    let sub = write_manifest(&dir, "sub.json", r#"{"title":"Sub","entries":[]}"#);
    let root = write_manifest(
        &dir,
        "root.json",
        &format!(r#"{{"title":"Docs","entries":[{{"title":"Intro"}},{{"href":{sub:?}}}]}}"#),
    );

    let resolver = Resolver::new(ManifestFetcher::default());
    let tree = resolver.resolve(&root).await.unwrap();

    let expected: Entry = serde_json::from_str(
        r#"{"title":"Docs","entries":[{"title":"Intro"},{"title":"Sub","entries":[]}]}"#,
    )
    .unwrap();
    assert_eq!(tree, expected);
}

#[tokio::test]
async fn missing_child_manifest_is_dropped_from_disk_tree() {
    let dir = TempDir::new().unwrap();
    let kept = write_manifest(&dir, "kept.json", r#"{"title":"Kept"}"#);
    let missing = dir.path().join("missing.json");
    let missing = missing.to_str().unwrap();
    let root = write_manifest(
        &dir,
        "root.json",
        &format!(r#"{{"title":"Docs","entries":[{{"href":{missing:?}}},{{"href":{kept:?}}}]}}"#),
    );

    let resolver = Resolver::new(ManifestFetcher::default());
    let tree = resolver.resolve(&root).await.unwrap();
    let children = tree.entries.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].title.as_deref(), Some("Kept"));
}

#[tokio::test]
async fn missing_root_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let resolver = Resolver::new(ManifestFetcher::default());
    let err = resolver.resolve(path.to_str().unwrap()).await.unwrap_err();
    assert!(matches!(err, ResolveError::StorageFetch { .. }));
}

#[tokio::test]
async fn malformed_root_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let root = write_manifest(&dir, "root.json", "not json at all");

    let resolver = Resolver::new(ManifestFetcher::default());
    let err = resolver.resolve(&root).await.unwrap_err();
    assert!(matches!(err, ResolveError::Parse { .. }));
}

#[tokio::test]
async fn root_mountpoint_splices_target_from_disk() {
    let dir = TempDir::new().unwrap();
    let target = write_manifest(
        &dir,
        "target.json",
        r#"{"title":"Target","entries":[{"title":"Leaf","link":"leaf.html"}]}"#,
    );
    let root = write_manifest(&dir, "root.json", &format!(r#"{{"href":{target:?}}}"#));

    let resolver = Resolver::new(ManifestFetcher::default());
    let tree = resolver.resolve(&root).await.unwrap();
    assert_eq!(tree.title.as_deref(), Some("Target"));
    assert!(tree.href.is_none());
    let children = tree.entries.unwrap();
    assert_eq!(children[0].link.as_deref(), Some("leaf.html"));
}
