//! Single-tree model.

use std::path::Path;

use ndarray::ArrayView2;

use crate::data::Dataset;
use crate::inference::{PredictError, Predictions, run_decision};
use crate::persist::{ReadError, WriteError, load_tree, save_tree};
use crate::repr::Tree;
use crate::training::TreeBuilder;

use super::TreeConfig;

/// A trained classification tree with prediction and persistence.
#[derive(Debug, Clone)]
pub struct TreeModel {
    tree: Tree,
}

impl TreeModel {
    /// Wrap an existing tree.
    pub fn from_tree(tree: Tree) -> Self {
        Self { tree }
    }

    /// Train on every instance of `dataset`.
    pub fn train(dataset: &Dataset, config: &TreeConfig) -> Self {
        let tree = TreeBuilder::new(config.to_params()).train_tree(dataset);
        Self { tree }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn into_tree(self) -> Tree {
        self.tree
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.tree.n_features()
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.tree.n_classes()
    }

    /// Predict labels and probabilities for `features` (`[n_features, n_samples]`).
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Predictions, PredictError> {
        run_decision(&self.tree, features)
    }

    /// Save to `path` in text form.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        save_tree(&self.tree, path)
    }

    /// Load and validate a model saved with [`TreeModel::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReadError> {
        load_tree(path).map(Self::from_tree)
    }
}
