//! Greedy tree induction with randomized split candidates.

use crate::data::Dataset;
use crate::repr::index::{MAX_LEVEL, children, level};
use crate::repr::{Node, NodeIndex, NodeStore, ROOT, Tree};

use super::candidates::{Candidate, RandomProposer, SplitProposer};
use super::entropy::SplitScorer;
use super::logger::{TrainingLogger, Verbosity};
use super::partition::{InstanceList, class_counts, is_pure, partition};

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for single-tree training.
///
/// Usually derived from [`crate::model::TreeConfig`], which validates them.
#[derive(Clone, Debug)]
pub struct TreeParams {
    /// Leaves are forced on this level (root is level 1).
    ///
    /// Values above [`MAX_LEVEL`] are clamped when training.
    pub max_depth: u32,
    /// Candidates scored per decision node.
    pub n_candidates: usize,
    /// Nodes with fewer instances become leaves.
    pub min_split_size: usize,
    /// Threshold spread in standard deviations around the feature mean.
    pub search_range: f64,
    pub seed: u64,
    pub verbosity: Verbosity,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 5,
            n_candidates: 10,
            min_split_size: 10,
            search_range: 3.0,
            seed: 42,
            verbosity: Verbosity::default(),
        }
    }
}

impl TreeParams {
    /// Minimum splittable list size for a dataset of `n_samples`.
    ///
    /// Large datasets raise the floor to one per mille of the samples.
    pub fn effective_min_split(&self, n_samples: usize) -> usize {
        self.min_split_size.max(n_samples / 1000)
    }

    /// `max_depth` limited to the levels a [`NodeIndex`] can address.
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.clamp(1, MAX_LEVEL)
    }
}

// ============================================================================
// TreeBuilder
// ============================================================================

/// Builds a [`Tree`] from a [`Dataset`].
///
/// Nodes are expanded from an explicit work list in pre-order (node, left
/// subtree, right subtree), so the node store's insertion order and the
/// proposer's random stream match a depth-first recursive build.
#[derive(Debug)]
pub struct TreeBuilder<P = RandomProposer> {
    params: TreeParams,
    proposer: P,
}

impl TreeBuilder<RandomProposer> {
    pub fn new(params: TreeParams) -> Self {
        let proposer = RandomProposer::new(params.seed, params.search_range);
        Self { params, proposer }
    }
}

impl<P: SplitProposer> TreeBuilder<P> {
    pub fn with_proposer(params: TreeParams, proposer: P) -> Self {
        Self { params, proposer }
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    /// Grow a tree over every instance of `dataset`.
    pub fn train_tree(&mut self, dataset: &Dataset) -> Tree {
        let logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(
            dataset.n_samples(),
            dataset.n_features(),
            dataset.n_classes(),
        );

        let max_depth = self.params.effective_max_depth();
        let min_split = self.params.effective_min_split(dataset.n_samples());
        let mut nodes = NodeStore::for_depth(max_depth);
        let mut scorer = SplitScorer::new(dataset.n_classes());
        let mut candidates: Vec<Candidate> = Vec::with_capacity(self.params.n_candidates);

        let all: InstanceList = (0..dataset.n_samples()).collect();
        let mut work: Vec<(NodeIndex, InstanceList)> = vec![(ROOT, all)];

        while let Some((index, instances)) = work.pop() {
            let child_indices = children(index);
            let make_leaf = level(index) >= max_depth
                || child_indices.is_none()
                || instances.len() < min_split
                || is_pure(dataset, &instances);

            let best = match child_indices {
                Some(indices) if !make_leaf => {
                    self.proposer
                        .propose(dataset, self.params.n_candidates, &mut candidates);
                    best_candidate(dataset, &instances, &candidates, &mut scorer)
                        .map(|best| (best, indices))
                }
                _ => None,
            };

            let Some(((split, score), (left_index, right_index))) = best else {
                logger.leaf(index, instances.len());
                nodes.add(index, Node::leaf(class_counts(dataset, &instances)));
                continue;
            };

            logger.split(index, split.feature, split.threshold, score);
            nodes.add(index, Node::split(split.feature, split.threshold));

            let (left, right) = partition(dataset, instances, &split);
            if left.is_empty() || right.is_empty() {
                logger.degenerate_split(index, left.len(), right.len());
            }
            // Popped left first.
            work.push((right_index, right));
            work.push((left_index, left));
        }

        let tree = Tree::new(
            max_depth,
            Some(self.params.n_candidates),
            dataset.n_features(),
            dataset.n_classes(),
            nodes,
        );
        logger.finish_training(tree.n_nodes(), tree.n_leaves(), tree.depth());
        tree
    }
}

/// Highest-scoring candidate; the first one wins ties.
fn best_candidate(
    dataset: &Dataset,
    instances: &[usize],
    candidates: &[Candidate],
    scorer: &mut SplitScorer,
) -> Option<(Candidate, f64)> {
    let mut best: Option<(Candidate, f64)> = None;
    for candidate in candidates {
        let score = scorer.score(dataset, instances, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((*candidate, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::FixedProposer;
    use ndarray::array;

    fn line_dataset() -> Dataset {
        let features = array![[0.0, 1.0, 2.0, 3.0]];
        let labels = array![1, 1, 2, 2];
        Dataset::new(features.view(), labels.view()).unwrap()
    }

    fn params(max_depth: u32) -> TreeParams {
        TreeParams {
            max_depth,
            n_candidates: 1,
            min_split_size: 1,
            ..Default::default()
        }
    }

    #[test]
    fn forced_split_produces_pure_leaves() {
        let ds = line_dataset();
        let proposer = FixedProposer::new(vec![Candidate {
            feature: 0,
            threshold: 1.5,
        }]);
        let tree = TreeBuilder::with_proposer(params(2), proposer).train_tree(&ds);

        assert_eq!(tree.node(0).unwrap(), &Node::split(0, 1.5));
        assert_eq!(tree.node(1).unwrap(), &Node::leaf(vec![2.0, 0.0]));
        assert_eq!(tree.node(2).unwrap(), &Node::leaf(vec![0.0, 2.0]));
        assert_eq!(tree.n_nodes(), 3);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn insertion_order_is_pre_order() {
        let ds = line_dataset();
        // Useless split keeps every instance on the left until depth runs out.
        let proposer = FixedProposer::new(vec![Candidate {
            feature: 0,
            threshold: 10.0,
        }]);
        let tree = TreeBuilder::with_proposer(params(3), proposer).train_tree(&ds);

        let order: Vec<_> = tree.nodes().iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec![0, 1, 3, 4, 2]);
        assert_eq!(tree.node(4).unwrap(), &Node::leaf(vec![0.0, 0.0]));
        assert_eq!(tree.node(3).unwrap(), &Node::leaf(vec![2.0, 2.0]));
    }

    #[test]
    fn depth_one_is_a_single_leaf() {
        let ds = line_dataset();
        let tree = TreeBuilder::new(params(1)).train_tree(&ds);
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.node(0).unwrap(), &Node::leaf(vec![2.0, 2.0]));
    }

    #[test]
    fn small_lists_become_leaves() {
        let ds = line_dataset();
        let p = TreeParams {
            min_split_size: 5,
            ..params(4)
        };
        let tree = TreeBuilder::new(p).train_tree(&ds);
        assert_eq!(tree.n_nodes(), 1);
    }

    #[test]
    fn depth_beyond_index_range_is_clamped() {
        // Constant feature: every split sends all instances left.
        let features = array![[1.0, 1.0, 1.0, 1.0]];
        let labels = array![1, 2, 1, 2];
        let ds = Dataset::new(features.view(), labels.view()).unwrap();

        let tree = TreeBuilder::new(params(70)).train_tree(&ds);

        assert_eq!(tree.max_depth(), MAX_LEVEL);
        assert_eq!(tree.depth(), MAX_LEVEL);
        // One split and one empty right leaf per inner level, plus the last leaf.
        assert_eq!(tree.n_nodes(), 2 * (MAX_LEVEL as usize - 1) + 1);
        assert_eq!(tree.validate(), Ok(()));
        assert!(tree.nodes().iter().all(|(index, _)| level(index) <= MAX_LEVEL));
    }

    #[test]
    fn zero_depth_is_a_single_leaf() {
        let tree = TreeBuilder::new(params(0)).train_tree(&line_dataset());
        assert_eq!(tree.n_nodes(), 1);
        assert_eq!(tree.max_depth(), 1);
    }

    #[test]
    fn min_split_scales_with_dataset() {
        let p = TreeParams::default();
        assert_eq!(p.effective_min_split(500), 10);
        assert_eq!(p.effective_min_split(25_000), 25);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let ds = line_dataset();
        let mut scorer = SplitScorer::new(2);
        let a = Candidate {
            feature: 0,
            threshold: 1.5,
        };
        let b = Candidate {
            feature: 0,
            threshold: 1.7,
        };
        let (best, _) = best_candidate(&ds, &[0, 1, 2, 3], &[a, b], &mut scorer).unwrap();
        assert_eq!(best, a);
        let (best, _) = best_candidate(&ds, &[0, 1, 2, 3], &[b, a], &mut scorer).unwrap();
        assert_eq!(best, b);
    }
}
