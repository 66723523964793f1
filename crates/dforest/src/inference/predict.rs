//! Batch prediction over a feature matrix.

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::repr::{StoreError, Tree};
use crate::utils::{argmax_first, normalize_counts_into};

use super::traverse::traverse;

/// Errors raised during prediction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    #[error("model expects {expected} features, input has {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Predicted labels and class probabilities for a batch of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Predictions {
    /// 1-based class labels, length `n_samples`.
    pub labels: Array1<u32>,
    /// `[n_samples, n_classes]`; column `c` is class `c + 1`.
    pub probabilities: Array2<f64>,
}

impl Predictions {
    /// Derive labels as the arg-max class of each probability row.
    ///
    /// Ties resolve to the lowest class.
    pub fn from_probabilities(probabilities: Array2<f64>) -> Self {
        let labels = probabilities
            .axis_iter(Axis(0))
            .map(|row| match row.as_slice() {
                Some(row) => argmax_first(row) as u32 + 1,
                None => argmax_first(&row.to_vec()) as u32 + 1,
            })
            .collect();
        Self {
            labels,
            probabilities,
        }
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }
}

/// Check that `features` (`[n_features, n_samples]`) matches the tree.
pub(crate) fn check_features(expected: usize, features: ArrayView2<f64>) -> Result<(), PredictError> {
    let got = features.nrows();
    if got != expected {
        return Err(PredictError::FeatureMismatch { expected, got });
    }
    Ok(())
}

/// Per-sample leaf probabilities, `[n_samples, n_classes]`.
///
/// Each row is the reached leaf's counts divided by `sum + EPSILON`.
pub fn predict_proba(tree: &Tree, features: ArrayView2<f64>) -> Result<Array2<f64>, PredictError> {
    check_features(tree.n_features(), features)?;

    let n_samples = features.ncols();
    let mut out = Array2::zeros((n_samples, tree.n_classes()));
    for (sample, mut row) in features
        .axis_iter(Axis(1))
        .zip(out.axis_iter_mut(Axis(0)))
    {
        let (_, counts) = traverse(tree, sample)?;
        match row.as_slice_mut() {
            Some(row) => normalize_counts_into(counts, row),
            None => {
                let mut buf = vec![0.0; counts.len()];
                normalize_counts_into(counts, &mut buf);
                row.assign(&Array1::from(buf));
            }
        }
    }
    Ok(out)
}

/// Predict labels and probabilities for every sample.
///
/// # Errors
///
/// [`PredictError::FeatureMismatch`] when the row count of `features`
/// differs from the tree's feature dimension.
pub fn run_decision(tree: &Tree, features: ArrayView2<f64>) -> Result<Predictions, PredictError> {
    predict_proba(tree, features).map(Predictions::from_probabilities)
}
