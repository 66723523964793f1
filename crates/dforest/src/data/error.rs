//! Dataset construction errors.

/// Errors raised while validating raw arrays into a [`Dataset`](super::Dataset).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("feature matrix has no feature columns")]
    EmptyFeatures,

    #[error("number of labels ({labels}) does not match number of samples ({samples})")]
    LabelLenMismatch { samples: usize, labels: usize },

    #[error("label {label} at sample {index} is not a positive class id")]
    InvalidLabel { index: usize, label: i64 },

    #[error("label vector is empty, no classes to learn")]
    NoClasses,

    #[error("buffer length {got} does not match {expected} = n_samples * n_features")]
    BufferLenMismatch { expected: usize, got: usize },
}
