//! Shared error type.
//!
//! Sub-crates define their own error enums for domain failures and wrap
//! `RnError` for the cross-cutting cases (configuration, I/O).

use thiserror::Error;

/// Common base error for the `rn-*` crates.
#[derive(Debug, Error)]
pub enum RnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `rn-*` crates.
pub type RnResult<T> = Result<T, RnError>;
