//! End-to-end checks of the documented behavior of every component.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use datakit::graph::{Error, adapter, find_cycle, validate_order};
use datakit::{cycle_exists, leafage, merge, reorder, tokenize};
use proptest::prelude::*;
use std::collections::HashMap;

fn cyclic_sample() -> HashMap<u32, Vec<u32>> {
    HashMap::from([(1, vec![2, 3]), (2, vec![1])])
}

#[test]
fn tokenize_handles_escapes_and_empty_segments() {
    assert_eq!(tokenize(r"a/b\/c//d", '/'), ["a", "b/c", "", "d"]);
}

#[test]
fn cycle_exists_depends_on_start() {
    let graph = cyclic_sample();
    assert!(cycle_exists(1, adapter::from_map(&graph)));
    assert!(!cycle_exists(3, adapter::from_map(&graph)));
    assert_eq!(find_cycle(2, adapter::from_map(&graph)), Some(vec![2, 1, 2]));
}

#[test]
fn leafage_yields_reachable_leaves() {
    let graph = cyclic_sample();
    let mut leaves: Vec<u32> = leafage([1, 4], adapter::from_map(&graph)).collect();
    leaves.sort_unstable();
    assert_eq!(leaves, [3, 4]);
}

#[test]
fn reorder_examples() {
    let chain = HashMap::from([(2, vec![1]), (3, vec![2])]);
    assert_eq!(reorder([1, 3, 2], adapter::from_map(&chain)).unwrap(), [1, 2, 3]);

    let single = HashMap::from([(2, vec![1])]);
    assert_eq!(reorder([3, 2, 1], adapter::from_map(&single)).unwrap(), [3, 1, 2]);
    assert_eq!(reorder([1, 3, 2], adapter::from_map(&single)).unwrap(), [1, 3, 2]);
}

#[test]
fn reorder_reports_cycles() {
    let graph = HashMap::from([(1, vec![2]), (2, vec![1])]);
    let err = reorder([1, 2], adapter::from_map(&graph)).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { .. }));
    assert_eq!(err.cycle().first(), err.cycle().last());
}

#[test]
fn merge_later_wins_and_leaves_inputs_alone() {
    let a = HashMap::from([("a", 1)]);
    let b = HashMap::from([("a", 2), ("b", 1)]);
    let c = HashMap::from([("c", 3)]);

    let merged = merge([&a, &b, &c]);

    assert_eq!(merged, HashMap::from([("a", 2), ("b", 1), ("c", 3)]));
    assert_eq!(a, HashMap::from([("a", 1)]));
    assert_eq!(b, HashMap::from([("a", 2), ("b", 1)]));
    assert_eq!(c, HashMap::from([("c", 3)]));
}

#[test]
fn nested_access_through_facade() {
    let mut dict = datakit::MDict::new();
    dict.set("server.ports", serde_json::json!([80, 443])).unwrap();
    assert_eq!(dict.get("server.ports.-1").unwrap(), &serde_json::json!(443));
    assert_eq!(
        datakit::text::indent(&datakit::wrap("one two three", 7), 1),
        "  one two\n  three"
    );
}

/// Random dependency maps over `0..n` where node `i` only depends on lower
/// nodes, plus a shuffled item list.
fn dag_and_items() -> impl Strategy<Value = (HashMap<u32, Vec<u32>>, Vec<u32>)> {
    (1..12_u32).prop_flat_map(|n| {
        let deps = proptest::collection::vec(proptest::collection::vec(0..n, 0..3), n as usize);
        let items = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        (deps, items).prop_map(|(deps, items)| {
            let graph: HashMap<u32, Vec<u32>> = (0_u32..)
                .zip(deps)
                .map(|(node, children)| {
                    let children: Vec<u32> = children.into_iter().filter(|c| *c < node).collect();
                    (node, children)
                })
                .collect();
            (graph, items)
        })
    })
}

proptest! {
    #[test]
    fn reorder_output_validates((graph, items) in dag_and_items()) {
        let sorted = reorder(items, adapter::from_map(&graph)).unwrap();
        prop_assert!(validate_order(&sorted, adapter::from_map(&graph)).is_valid);
    }

    #[test]
    fn reorder_is_idempotent((graph, items) in dag_and_items()) {
        let once = reorder(items, adapter::from_map(&graph)).unwrap();
        let twice = reorder(once.clone(), adapter::from_map(&graph)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tokenize_join_round_trip(tokens in proptest::collection::vec("[a-z./]{0,6}", 1..6)) {
        prop_assert_eq!(tokenize(&datakit::join(&tokens, '.'), '.'), tokens);
    }
}
