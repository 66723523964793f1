//! High-level model wrappers.
//!
//! - [`TreeModel`]: one tree with train, predict, save and load
//! - [`ForestModel`]: averaged ensemble of independently seeded trees
//! - [`TreeConfig`] / [`ForestConfig`]: validated builder configuration
//!
//! # Example
//!
//! ```
//! use dforest::data::Dataset;
//! use dforest::model::{TreeConfig, TreeModel};
//! use ndarray::array;
//!
//! let features = array![[0.0, 1.0, 2.0, 3.0, 0.5, 2.5]];
//! let labels = array![1, 1, 2, 2, 1, 2];
//! let data = Dataset::new(features.view(), labels.view()).unwrap();
//!
//! let config = TreeConfig::builder()
//!     .max_depth(3)
//!     .min_split_size(2)
//!     .build()
//!     .unwrap();
//! let model = TreeModel::train(&data, &config);
//!
//! let predictions = model.predict(features.view()).unwrap();
//! assert_eq!(predictions.labels.len(), 6);
//! ```

mod config;
mod forest;
mod tree;

pub use config::{ConfigError, ForestConfig, TreeConfig};
pub use forest::ForestModel;
pub use tree::TreeModel;
