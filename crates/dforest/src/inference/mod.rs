//! Tree inference.
//!
//! Feature matrices are feature-major, `[n_features, n_samples]`, the same
//! layout [`Dataset`](crate::data::Dataset) uses for training.

mod predict;
mod traverse;

pub use predict::{PredictError, Predictions, predict_proba, run_decision};
pub(crate) use predict::check_features;
pub use traverse::{Step, decide, traverse};
