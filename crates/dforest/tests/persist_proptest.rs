//! Property-based tests for the tree text format.
//!
//! Arbitrary trees must survive write/read exactly: same nodes, same insertion
//! order, same predictions.

use ndarray::Array2;
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use dforest::inference::run_decision;
use dforest::persist::{tree_from_str, tree_to_string};
use dforest::repr::index::{left_child, level, right_child};
use dforest::repr::{Node, NodeIndex, NodeStore, ROOT, Tree};

// =============================================================================
// Arbitrary Tree Generators
// =============================================================================

#[derive(Debug, Clone)]
struct TreeSpec {
    max_depth: u32,
    n_features: usize,
    n_classes: usize,
    split_flags: Vec<bool>,
    thresholds: Vec<f64>,
    counts: Vec<u32>,
}

fn arb_spec() -> impl Strategy<Value = TreeSpec> {
    (
        1u32..7,
        1usize..5,
        1usize..5,
        prop_vec(any::<bool>(), 1..64),
        prop_vec(-1e6f64..1e6, 1..64),
        prop_vec(0u32..100, 1..128),
    )
        .prop_map(
            |(max_depth, n_features, n_classes, split_flags, thresholds, counts)| TreeSpec {
                max_depth,
                n_features,
                n_classes,
                split_flags,
                thresholds,
                counts,
            },
        )
}

/// Grow a tree in pre-order, cycling through the generated value pools.
fn build_tree(spec: &TreeSpec) -> Tree {
    let mut nodes = NodeStore::new();
    let mut stack: Vec<NodeIndex> = vec![ROOT];
    let (mut s, mut t, mut c) = (0usize, 0usize, 0usize);

    while let Some(index) = stack.pop() {
        let split = level(index) < spec.max_depth && spec.split_flags[s % spec.split_flags.len()];
        s += 1;
        if split {
            let feature = s % spec.n_features;
            let threshold = spec.thresholds[t % spec.thresholds.len()];
            t += 1;
            nodes.add(index, Node::split(feature, threshold));
            stack.push(right_child(index));
            stack.push(left_child(index));
        } else {
            let counts = (0..spec.n_classes)
                .map(|k| f64::from(spec.counts[(c + k) % spec.counts.len()]))
                .collect();
            c += spec.n_classes;
            nodes.add(index, Node::leaf(counts));
        }
    }

    Tree::new(spec.max_depth, None, spec.n_features, spec.n_classes, nodes)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn generated_trees_are_valid(spec in arb_spec()) {
        let tree = build_tree(&spec);
        prop_assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn text_round_trip_is_exact(spec in arb_spec()) {
        let tree = build_tree(&spec);
        let text = tree_to_string(&tree);
        let back = tree_from_str(&text).unwrap();

        prop_assert_eq!(back.n_nodes(), tree.n_nodes());
        let original: Vec<_> = tree.nodes().iter().collect();
        let reloaded: Vec<_> = back.nodes().iter().collect();
        prop_assert_eq!(original, reloaded);
        prop_assert_eq!(tree_to_string(&back), text);
    }

    #[test]
    fn reloaded_tree_predicts_identically(
        spec in arb_spec(),
        values in prop_vec(-2e6f64..2e6, 4 * 16),
    ) {
        let tree = build_tree(&spec);
        let back = tree_from_str(&tree_to_string(&tree)).unwrap();

        let n_samples = 16;
        let x = Array2::from_shape_fn((spec.n_features, n_samples), |(f, i)| values[f * n_samples + i]);
        prop_assert_eq!(
            run_decision(&tree, x.view()).unwrap(),
            run_decision(&back, x.view()).unwrap()
        );
    }
}
