//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Every variant is an input-validation rejection; nothing here is retryable
/// and no operation returning one of these has mutated any state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SandboxError {
    /// A charge magnitude or coordinate was not a finite real number.
    #[error("invalid input for `{field}`: {value:?} is not a finite number")]
    InvalidInput {
        /// Name of the rejected field (`q`, `x` or `y`).
        field: &'static str,
        /// The offending value as received.
        value: String,
    },
    /// A sample lattice needs at least two points per axis.
    #[error("grid size must be at least 2, got {0}")]
    InvalidGridSize(usize),
    /// Raised when a configuration value is out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

impl SandboxError {
    pub(crate) fn invalid_input(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}
