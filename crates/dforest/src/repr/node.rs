//! Tree node variants.

/// Feature id written for leaves in the text format.
pub const LEAF_FEATURE: i64 = -1;

/// A single tree node.
///
/// Decision nodes route `x[feature] <= threshold` to the left child and
/// everything else to the right child. Leaves hold the raw, unnormalized
/// per-class counts of the training instances that reached them; `counts[c]`
/// belongs to class `c + 1`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Split { feature: usize, threshold: f64 },
    Leaf { counts: Vec<f64> },
}

impl Node {
    #[inline]
    pub fn split(feature: usize, threshold: f64) -> Self {
        Node::Split { feature, threshold }
    }

    #[inline]
    pub fn leaf(counts: Vec<f64>) -> Self {
        Node::Leaf { counts }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Feature id as stored on disk: the split feature, or [`LEAF_FEATURE`].
    pub fn feature_raw(&self) -> i64 {
        match self {
            Node::Split { feature, .. } => *feature as i64,
            Node::Leaf { .. } => LEAF_FEATURE,
        }
    }

    /// Split threshold, `0.0` for leaves.
    pub fn threshold(&self) -> f64 {
        match self {
            Node::Split { threshold, .. } => *threshold,
            Node::Leaf { .. } => 0.0,
        }
    }

    /// Class counts for leaves, `None` for decision nodes.
    pub fn counts(&self) -> Option<&[f64]> {
        match self {
            Node::Leaf { counts } => Some(counts),
            Node::Split { .. } => None,
        }
    }
}
