//! Single-sample tree traversal.

use ndarray::ArrayView1;

use crate::repr::index::{left_child, right_child};
use crate::repr::{Node, NodeIndex, ROOT, StoreError, Tree};

/// Result of evaluating one node against a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step<'a> {
    /// Reached a leaf; carries its raw class counts.
    Leaf(&'a [f64]),
    /// Continue at this child.
    Next(NodeIndex),
}

/// Evaluate node `index` of `tree` against `sample`.
///
/// `sample[feature] <= threshold` goes left, anything else (including NaN)
/// goes right.
#[inline]
pub fn decide<'t>(
    tree: &'t Tree,
    index: NodeIndex,
    sample: ArrayView1<f64>,
) -> Result<Step<'t>, StoreError> {
    match tree.node(index)? {
        Node::Leaf { counts } => Ok(Step::Leaf(counts)),
        Node::Split { feature, threshold } => {
            if sample[*feature] <= *threshold {
                Ok(Step::Next(left_child(index)))
            } else {
                Ok(Step::Next(right_child(index)))
            }
        }
    }
}

/// Walk from the root to the leaf `sample` lands in.
///
/// `sample` must have at least `tree.n_features()` entries.
pub fn traverse<'t>(
    tree: &'t Tree,
    sample: ArrayView1<f64>,
) -> Result<(NodeIndex, &'t [f64]), StoreError> {
    let mut index = ROOT;
    loop {
        match decide(tree, index, sample)? {
            Step::Leaf(counts) => return Ok((index, counts)),
            Step::Next(child) => index = child,
        }
    }
}
