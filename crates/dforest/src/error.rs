//! Crate-level error for the one-call entry points.

use crate::data::DatasetError;
use crate::inference::PredictError;
use crate::model::ConfigError;
use crate::persist::{ReadError, WriteError};

/// Any failure of [`train`](crate::train) or [`infer`](crate::infer).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),

    #[error("failed to read tree: {0}")]
    Read(#[from] ReadError),

    #[error("failed to write tree: {0}")]
    Write(#[from] WriteError),
}
