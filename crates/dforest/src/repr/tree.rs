//! Classification tree over a sparse [`NodeStore`].

use ndarray::ArrayView1;

use crate::inference::{PredictError, traverse};

use super::index::{NodeIndex, ROOT, level, parent};
use super::node::Node;
use super::store::{NodeStore, StoreError};

// ============================================================================
// TreeValidationError
// ============================================================================

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeValidationError {
    #[error("tree has no root node")]
    MissingRoot,

    #[error("decision node {node} has no {side} child {child}")]
    MissingChild {
        node: NodeIndex,
        side: &'static str,
        child: NodeIndex,
    },

    #[error("node {node} is not reachable from the root")]
    Unreachable { node: NodeIndex },

    #[error("node {node} splits on feature {feature} but the tree has {n_features} features")]
    FeatureOutOfRange {
        node: NodeIndex,
        feature: usize,
        n_features: usize,
    },

    #[error("leaf {node} has {got} class counts, expected {expected}")]
    LeafClassMismatch {
        node: NodeIndex,
        expected: usize,
        got: usize,
    },

    #[error("node {node} sits on level {level}, deeper than max depth {max_depth}")]
    TooDeep {
        node: NodeIndex,
        level: u32,
        max_depth: u32,
    },
}

// ============================================================================
// Tree
// ============================================================================

/// A trained (or loaded) classification tree.
///
/// The root lives at index 0; see [`super::index`] for the index algebra.
#[derive(Debug, Clone)]
pub struct Tree {
    max_depth: u32,
    /// Candidate count used for training; unknown for trees read from disk.
    n_candidates: Option<usize>,
    n_features: usize,
    n_classes: usize,
    nodes: NodeStore,
}

impl Tree {
    pub fn new(
        max_depth: u32,
        n_candidates: Option<usize>,
        n_features: usize,
        n_classes: usize,
        nodes: NodeStore,
    ) -> Self {
        Self {
            max_depth,
            n_candidates,
            n_features,
            n_classes,
            nodes,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn n_candidates(&self) -> Option<usize> {
        self.n_candidates
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    #[inline]
    pub fn nodes(&self) -> &NodeStore {
        &self.nodes
    }

    /// Number of stored nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn node(&self, index: NodeIndex) -> Result<&Node, StoreError> {
        self.nodes.get(index)
    }

    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|(_, n)| n.is_leaf()).count()
    }

    /// Deepest populated level (1 for a single-leaf tree, 0 when empty).
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|(k, _)| level(k)).max().unwrap_or(0)
    }

    /// Index of the leaf `sample` lands in.
    pub fn leaf_for(&self, sample: ArrayView1<f64>) -> Result<NodeIndex, PredictError> {
        if sample.len() != self.n_features {
            return Err(PredictError::FeatureMismatch {
                expected: self.n_features,
                got: sample.len(),
            });
        }
        let (index, _) = traverse(self, sample)?;
        Ok(index)
    }

    /// Check that the tree is structurally sound for inference.
    ///
    /// Every decision node must have both children, every non-root node must
    /// hang off a decision node, splits must reference known features and leaf
    /// counts must cover every class.
    pub fn validate(&self) -> Result<(), TreeValidationError> {
        if !self.nodes.has(ROOT) {
            return Err(TreeValidationError::MissingRoot);
        }

        for (index, node) in self.nodes.iter() {
            let lvl = level(index);
            if lvl > self.max_depth {
                return Err(TreeValidationError::TooDeep {
                    node: index,
                    level: lvl,
                    max_depth: self.max_depth,
                });
            }

            if let Some(p) = parent(index) {
                match self.nodes.get(p) {
                    Ok(Node::Split { .. }) => {}
                    _ => return Err(TreeValidationError::Unreachable { node: index }),
                }
            }

            match node {
                Node::Split { feature, .. } => {
                    if *feature >= self.n_features {
                        return Err(TreeValidationError::FeatureOutOfRange {
                            node: index,
                            feature: *feature,
                            n_features: self.n_features,
                        });
                    }
                    let children = index
                        .checked_mul(2)
                        .and_then(|n| Some((n.checked_add(1)?, n.checked_add(2)?)));
                    let Some((left, right)) = children else {
                        return Err(TreeValidationError::TooDeep {
                            node: index,
                            level: lvl + 1,
                            max_depth: self.max_depth,
                        });
                    };
                    for (side, child) in [("left", left), ("right", right)] {
                        if !self.nodes.has(child) {
                            return Err(TreeValidationError::MissingChild {
                                node: index,
                                side,
                                child,
                            });
                        }
                    }
                }
                Node::Leaf { counts } => {
                    if counts.len() != self.n_classes {
                        return Err(TreeValidationError::LeafClassMismatch {
                            node: index,
                            expected: self.n_classes,
                            got: counts.len(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
