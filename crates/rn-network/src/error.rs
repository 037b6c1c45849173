//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `rn-network`.
///
/// Node labels are rendered through `Display` so the error type stays
/// independent of the label type.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node {0} not found in network")]
    UnknownNode(String),

    #[error("cannot add road {from}–{to}: intersection {missing} does not exist")]
    InvalidReference { from: String, to: String, missing: String },

    #[error("network is full: {0} intersections already registered")]
    TooManyNodes(usize),

    #[error("road CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
