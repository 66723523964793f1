//! Verbosity-gated training log events.
//!
//! Events go through `tracing`; the library never installs a subscriber, so
//! nothing is printed unless the application sets one up.

use tracing::{debug, info, warn};

use crate::repr::NodeIndex;

/// How much the trainer reports.
///
/// Levels are ordered: each one includes everything below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Silent,
    Warning,
    Info,
    Debug,
}

/// Emits structured training events filtered by [`Verbosity`].
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn start_training(&self, n_samples: usize, n_features: usize, n_classes: usize) {
        if self.enabled(Verbosity::Info) {
            info!(n_samples, n_features, n_classes, "tree training started");
        }
    }

    pub fn split(&self, node: NodeIndex, feature: usize, threshold: f64, score: f64) {
        if self.enabled(Verbosity::Debug) {
            debug!(node, feature, threshold, score, "split");
        }
    }

    pub fn leaf(&self, node: NodeIndex, n_instances: usize) {
        if self.enabled(Verbosity::Debug) {
            debug!(node, n_instances, "leaf");
        }
    }

    /// A split sent every instance to one side.
    pub fn degenerate_split(&self, node: NodeIndex, left: usize, right: usize) {
        if self.enabled(Verbosity::Warning) {
            warn!(node, left, right, "split left one side empty");
        }
    }

    pub fn finish_training(&self, n_nodes: usize, n_leaves: usize, depth: u32) {
        if self.enabled(Verbosity::Info) {
            info!(n_nodes, n_leaves, depth, "tree training finished");
        }
    }

    pub fn start_forest(&self, n_trees: usize) {
        if self.enabled(Verbosity::Info) {
            info!(n_trees, "forest training started");
        }
    }

    pub fn finish_forest(&self, n_trees: usize) {
        if self.enabled(Verbosity::Info) {
            info!(n_trees, "forest training finished");
        }
    }
}
