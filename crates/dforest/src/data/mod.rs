//! Training data: the feature matrix, class labels and per-feature statistics.
//!
//! # Layout
//!
//! Features are held **feature-major**, shape `[n_features, n_samples]`: all
//! values of one feature are contiguous. A flat column-major buffer where
//! `feature(i, j) = X[i + j * n]` is exactly this layout, so it can be viewed
//! without copying via [`col_major_view`].
//!
//! Labels are 1-based class ids in `[1, n_classes]`.

mod dataset;
mod error;

pub use dataset::{Dataset, col_major_view};
pub use error::DatasetError;
