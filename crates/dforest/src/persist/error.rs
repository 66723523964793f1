//! Persistence errors.

use crate::repr::{NodeIndex, TreeValidationError};

/// Errors raised while reading a tree or forest.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing field {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid value for {field}: {message}")]
    InvalidValue {
        line: usize,
        field: &'static str,
        message: String,
    },

    #[error("unexpected end of input: expected {expected} node records, found {got}")]
    UnexpectedEnd { expected: usize, got: usize },

    #[error("line {line}: record beyond the declared node count")]
    TrailingRecord { line: usize },

    #[error("line {line}: node {index} appears more than once")]
    DuplicateNode { line: usize, index: NodeIndex },

    #[error("invalid tree: {0}")]
    Validation(#[from] TreeValidationError),

    #[error("forest has no trees")]
    EmptyForest,

    #[error("forest member {tree} has {field} {got}, expected {expected}")]
    MemberMismatch {
        tree: usize,
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Errors raised while writing a tree or forest.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("forest has no trees")]
    EmptyForest,
}

impl From<tempfile::PersistError> for WriteError {
    fn from(err: tempfile::PersistError) -> Self {
        WriteError::Io(err.error)
    }
}
