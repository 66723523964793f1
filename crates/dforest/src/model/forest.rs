//! Forest of independently trained trees.

use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::data::Dataset;
use crate::inference::{PredictError, Predictions, check_features, predict_proba};
use crate::persist::{ReadError, WriteError, check_members, load_forest, save_forest};
use crate::repr::Tree;
use crate::training::{TrainingLogger, TreeBuilder};
use crate::utils::Parallelism;

use super::ForestConfig;

/// An ensemble of unweighted trees whose probabilities are averaged.
///
/// Every member sees the full training set; diversity comes from the random
/// split candidates alone.
#[derive(Debug, Clone)]
pub struct ForestModel {
    trees: Vec<Tree>,
    parallelism: Parallelism,
}

impl ForestModel {
    /// Assemble a forest from trees that agree on feature and class counts.
    pub fn from_trees(trees: Vec<Tree>) -> Result<Self, ReadError> {
        check_members(&trees)?;
        Ok(Self {
            trees,
            parallelism: Parallelism::Sequential,
        })
    }

    /// Train `config.n_trees` members, member `t` seeded with `seed + t`.
    pub fn train(dataset: &Dataset, config: &ForestConfig) -> Self {
        let logger = TrainingLogger::new(config.tree.verbosity);
        logger.start_forest(config.n_trees);

        let trees = config
            .parallelism
            .maybe_par_map(0..config.n_trees, |t| {
                TreeBuilder::new(config.member_params(t)).train_tree(dataset)
            });

        logger.finish_forest(trees.len());
        Self {
            trees,
            parallelism: config.parallelism,
        }
    }

    /// Use `parallelism` for prediction.
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    #[inline]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.trees.first().map_or(0, Tree::n_features)
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.trees.first().map_or(0, Tree::n_classes)
    }

    /// Mean of the member probability matrices, `[n_samples, n_classes]`.
    pub fn predict_proba(&self, features: ArrayView2<f64>) -> Result<Array2<f64>, PredictError> {
        check_features(self.n_features(), features)?;

        let per_tree = self
            .parallelism
            .maybe_par_map(&self.trees, |tree| predict_proba(tree, features));

        let mut sum = Array2::zeros((features.ncols(), self.n_classes()));
        for probs in per_tree {
            sum += &probs?;
        }
        Ok(sum / self.trees.len() as f64)
    }

    /// Predict averaged probabilities and their arg-max labels.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Predictions, PredictError> {
        self.predict_proba(features)
            .map(Predictions::from_probabilities)
    }

    /// Save into directory `dir`.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<(), WriteError> {
        save_forest(&self.trees, dir)
    }

    /// Load a forest saved with [`ForestModel::save`].
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ReadError> {
        Ok(Self {
            trees: load_forest(dir)?,
            parallelism: Parallelism::Sequential,
        })
    }
}
