//! Build persistence against the sled backend

use rigkit::build::{BuildState, BUILD_KEY};
use rigkit::catalog::seed::sample_parts;
use rigkit::compat::check_issues;
use rigkit::store::{SledStateStore, StateStore};
use std::sync::Arc;
use tempfile::TempDir;

fn open_sled(path: &std::path::Path) -> Arc<SledStateStore> {
    Arc::new(SledStateStore::open(path).unwrap())
}

fn seed_part(id: u32) -> rigkit::part::Part {
    sample_parts().into_iter().find(|p| p.id == id).unwrap()
}

/// Persist then reload yields an equal build
#[test]
fn test_build_roundtrip_across_reopen() {
    let temp = TempDir::new().unwrap();
    {
        let store = open_sled(temp.path());
        let mut build = BuildState::open(store).unwrap();
        build.add_part(seed_part(1)).unwrap();
        build.add_part(seed_part(3)).unwrap();
        build.add_part(seed_part(11)).unwrap();
    }

    let store = open_sled(temp.path());
    let build = BuildState::open(store).unwrap();
    assert_eq!(build.len(), 3);
    assert_eq!(build.slots().get("CPU").unwrap().id, 1);
    assert_eq!(build.slots().get("Motherboard").unwrap().id, 3);
    assert!((build.total() - (329.0 + 189.0 + 99.0)).abs() < 1e-9);
}

/// A build entry keeps its copied part even after the catalog moves on
#[test]
fn test_build_retains_copy_after_catalog_replace() {
    let temp = TempDir::new().unwrap();
    let store = open_sled(temp.path());

    let mut catalog = rigkit::catalog::CatalogStore::open(store.clone()).unwrap();
    let mut build = BuildState::open(store).unwrap();
    build.add_part(catalog.get(1).unwrap().clone()).unwrap();

    // Wipe the catalog entirely; the build entry must not change
    catalog.clear().unwrap();
    assert_eq!(build.slots().get("CPU").unwrap().name, "AMD Ryzen 7 7700X");
}

/// Compatibility issues derive from the reloaded state the same way
#[test]
fn test_issues_stable_across_reopen() {
    let temp = TempDir::new().unwrap();
    let before;
    {
        let store = open_sled(temp.path());
        let mut build = BuildState::open(store).unwrap();
        build.add_part(seed_part(1)).unwrap(); // AM5 CPU
        build.add_part(seed_part(4)).unwrap(); // LGA1700 board
        before = check_issues(build.slots());
        assert_eq!(before.len(), 1);
    }

    let store = open_sled(temp.path());
    let build = BuildState::open(store).unwrap();
    assert_eq!(check_issues(build.slots()), before);
}

/// A corrupt build record resets to empty, not a crash
#[test]
fn test_corrupt_build_record_resets_to_empty() {
    let temp = TempDir::new().unwrap();
    {
        let store = open_sled(temp.path());
        store.put(BUILD_KEY, b"not json at all").unwrap();
    }

    let store = open_sled(temp.path());
    let build = BuildState::open(store.clone()).unwrap();
    assert!(build.is_empty());
    assert_eq!(store.get(BUILD_KEY).unwrap().unwrap(), b"{}");
}

/// Removing a never-occupied slot does not touch the persisted record
#[test]
fn test_remove_absent_slot_leaves_record_alone() {
    let temp = TempDir::new().unwrap();
    let store = open_sled(temp.path());

    let mut build = BuildState::open(store.clone()).unwrap();
    build.add_part(seed_part(9)).unwrap();
    let raw_before = store.get(BUILD_KEY).unwrap().unwrap();

    assert!(build.remove_part("CPU").unwrap().is_none());
    assert_eq!(store.get(BUILD_KEY).unwrap().unwrap(), raw_before);
}
