//! Property-based tests for totals and compatibility determinism

use proptest::prelude::*;
use rigkit::build::BuildState;
use rigkit::compat::check_issues;
use rigkit::part::Part;
use rigkit::store::MemoryStateStore;
use std::sync::Arc;

fn arb_part() -> impl Strategy<Value = Part> {
    let categories = prop::sample::select(vec![
        "CPU",
        "Motherboard",
        "RAM",
        "Storage",
        "GPU",
        "PSU",
        "Cooler",
        "Case",
    ]);
    let sockets = prop::option::of(prop::sample::select(vec!["AM4", "AM5", "LGA1700"]));
    let ram_types = prop::option::of(prop::sample::select(vec!["DDR4", "DDR5"]));
    let interfaces = prop::option::of(prop::sample::select(vec!["NVMe", "SATA"]));

    (
        1u32..1000,
        "[A-Za-z0-9 ]{1,24}",
        categories,
        0.0f64..5000.0,
        sockets,
        ram_types,
        interfaces,
        prop::option::of(100u32..1200),
        prop::option::of(10u32..500),
    )
        .prop_map(
            |(id, name, category, price, socket, ram_type, interface, wattage, tdp)| Part {
                id,
                name,
                category: category.to_string(),
                price,
                socket: socket.map(str::to_string),
                ram_type: ram_type.map(str::to_string),
                capacity_gb: None,
                interface: interface.map(str::to_string),
                wattage,
                tdp,
            },
        )
}

fn build_from(parts: &[Part]) -> BuildState {
    let mut build = BuildState::open(Arc::new(MemoryStateStore::new())).unwrap();
    for part in parts {
        build.add_part(part.clone()).unwrap();
    }
    build
}

/// total() always equals the sum of prices over occupied slots
#[test]
fn test_total_equals_price_sum_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(arb_part(), 0..8), |parts| {
            let build = build_from(&parts);
            let expected: f64 = build.slots().values().map(|p| p.price).sum();
            assert!((build.total() - expected).abs() < 1e-6);
            Ok(())
        })
        .unwrap();
}

/// check_issues is deterministic: same build, same ordered issue list
#[test]
fn test_check_issues_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(arb_part(), 0..8), |parts| {
            let build = build_from(&parts);
            let first = check_issues(build.slots());
            let second = check_issues(build.slots());
            assert_eq!(first, second);
            Ok(())
        })
        .unwrap();
}

/// A build round-tripped through its persisted record checks identically
#[test]
fn test_issues_stable_across_persistence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(arb_part(), 0..8), |parts| {
            let store = Arc::new(MemoryStateStore::new());
            let before = {
                let mut build = BuildState::open(store.clone()).unwrap();
                for part in &parts {
                    build.add_part(part.clone()).unwrap();
                }
                check_issues(build.slots())
            };

            let reloaded = BuildState::open(store).unwrap();
            assert_eq!(check_issues(reloaded.slots()), before);
            Ok(())
        })
        .unwrap();
}

/// Removing a slot that is not occupied never changes the build
#[test]
fn test_remove_absent_is_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(arb_part(), 0..8), "[A-Za-z]{1,12}"),
            |(parts, slot)| {
                let mut build = build_from(&parts);
                prop_assume!(!build.slots().contains_key(&slot));

                let before = build.slots().clone();
                assert!(build.remove_part(&slot).unwrap().is_none());
                assert_eq!(build.slots(), &before);
                Ok(())
            },
        )
        .unwrap();
}
