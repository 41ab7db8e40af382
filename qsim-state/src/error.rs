//! Error types for state vector operations

use thiserror::Error;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Qubit count rejected at construction
    #[error("Invalid qubit count {num_qubits}: {reason}")]
    InvalidArgument { num_qubits: usize, reason: String },

    /// Qubit index outside the register, or a two-qubit gate addressing the same qubit twice
    #[error("Qubit index {index} out of range for {num_qubits}-qubit state")]
    QubitIndexOutOfRange { index: usize, num_qubits: usize },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Basis state index outside `0..dimension`
    #[error("Basis state {index} out of range for dimension {dimension}")]
    BasisStateOutOfRange { index: usize, dimension: usize },

    /// Dense `dimension × dimension` observable storage cannot be allocated
    #[error("Observable of dimension {dimension} is too large to store densely")]
    ObservableTooLarge { dimension: usize },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
