//! Error types for variational circuit evaluation

use qsim_state::StateError;
use thiserror::Error;

/// Errors raised while building or evaluating variational circuits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VqeError {
    /// Parameter vector length does not match the ansatz
    #[error("Ansatz expects {expected} parameters, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    /// Failure reported by the underlying state simulator
    #[error(transparent)]
    State(#[from] StateError),
}

/// Result type for variational operations
pub type Result<T> = std::result::Result<T, VqeError>;
