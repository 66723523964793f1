//! dforest: randomized decision trees and forests for classification.
//!
//! Trees are grown greedily: every decision node scores a handful of random
//! thresholds around each feature's mean by entropy decrease and keeps the
//! best one. Nodes live in a sparse store keyed by implicit binary-heap index,
//! and trees persist to a small tab-separated text format.
//!
//! # Key Types
//!
//! - [`TreeModel`] / [`ForestModel`] - High-level models with train/predict/save/load
//! - [`TreeConfig`] / [`ForestConfig`] - Configuration builders
//! - [`Dataset`] - Labeled training data
//! - [`Predictions`] - Labels and class probabilities
//!
//! # Layout
//!
//! Feature matrices are feature-major, `[n_features, n_samples]`. Labels are
//! 1-based class ids.
//!
//! # One-call API
//!
//! [`train`] and [`infer`] go straight from arrays to a tree file and back.
//!
//! ```
//! use ndarray::array;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("tree.txt");
//!
//! let features = array![[0.0, 1.0, 2.0, 3.0, 0.5, 2.5, 0.2, 2.8, 1.1, 1.9, 0.7, 2.2]];
//! let labels = array![1, 1, 2, 2, 1, 2, 1, 2, 1, 2, 1, 2];
//! dforest::train(features.view(), labels.view(), 3, 10, &path).unwrap();
//!
//! let predictions = dforest::infer(features.view(), &path).unwrap();
//! assert_eq!(predictions.probabilities.ncols(), 2);
//! ```

use std::path::Path;

use ndarray::{ArrayView1, ArrayView2};

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod error;
pub mod inference;
pub mod model;
pub mod persist;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{ForestModel, TreeModel};

// Configuration types
pub use model::{ConfigError, ForestConfig, TreeConfig};

// Data and results
pub use data::{Dataset, DatasetError};
pub use inference::{PredictError, Predictions};

// Representation
pub use repr::{Node, NodeStore, Tree};

// Shared utilities
pub use error::Error;
pub use training::Verbosity;
pub use utils::Parallelism;

// =============================================================================
// Entry Points
// =============================================================================

/// Train a tree on `features` (`[n_features, n_samples]`) and 1-based
/// `labels`, and save it to `path`.
///
/// Remaining settings take their [`TreeConfig`] defaults.
///
/// # Errors
///
/// - [`Error::Dataset`] for bad labels or shapes
/// - [`Error::Config`] for `max_depth` or `n_candidates` out of range
/// - [`Error::Write`] if the file cannot be written
pub fn train(
    features: ArrayView2<f64>,
    labels: ArrayView1<i64>,
    max_depth: u32,
    n_candidates: usize,
    path: impl AsRef<Path>,
) -> Result<TreeModel, Error> {
    let dataset = Dataset::new(features, labels)?;
    let config = TreeConfig::builder()
        .max_depth(max_depth)
        .n_candidates(n_candidates)
        .build()?;
    let model = TreeModel::train(&dataset, &config);
    model.save(path)?;
    Ok(model)
}

/// Load the tree at `path` and predict every sample of `features`.
///
/// # Errors
///
/// - [`Error::Read`] if the file is missing, malformed or structurally invalid
/// - [`Error::Predict`] if the feature count differs from the tree's
pub fn infer(features: ArrayView2<f64>, path: impl AsRef<Path>) -> Result<Predictions, Error> {
    let model = TreeModel::load(path)?;
    Ok(model.predict(features)?)
}
