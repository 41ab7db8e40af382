//! Dense amplitude storage for an n-qubit register

use crate::complex::{ONE, ZERO};
use crate::config::MAX_SUPPORTED_QUBITS;
use crate::error::{Result, StateError};
use num_complex::Complex64;

/// Quantum state vector
///
/// Holds the `2^n` complex amplitudes of an n-qubit register. Basis index
/// `i` encodes qubit `q` in bit `(i >> q) & 1`, so qubit 0 is the least
/// significant bit.
///
/// # Example
///
/// ```
/// use qsim_state::StateVector;
///
/// // Create a 2-qubit state (4 amplitudes)
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `num_qubits` is zero or wider than
    /// [`MAX_SUPPORTED_QUBITS`]
    ///
    /// # Example
    /// ```
    /// use qsim_state::StateVector;
    ///
    /// let state = StateVector::new(3).unwrap();
    /// assert_eq!(state.amplitudes()[0].re, 1.0);
    /// ```
    pub fn new(num_qubits: usize) -> Result<Self> {
        validate_width(num_qubits, MAX_SUPPORTED_QUBITS)?;

        let mut amplitudes = vec![ZERO; 1 << num_qubits];
        amplitudes[0] = ONE;

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// The amplitudes are copied as given; no normalization is applied.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `amplitudes.len() != 2^num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        validate_width(num_qubits, MAX_SUPPORTED_QUBITS)?;

        let dimension = 1 << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    #[inline]
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Owned copy of the amplitudes
    pub fn snapshot(&self) -> Vec<Complex64> {
        self.amplitudes.clone()
    }

    /// Consume the state and return its amplitudes
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.total_probability().sqrt()
    }

    /// Total probability mass `Σ|a_i|²`
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Check if the state is normalized (|norm - 1| < epsilon)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Reset the state to |0...0⟩ without reallocating
    pub fn reset(&mut self) {
        self.amplitudes.fill(ZERO);
        self.amplitudes[0] = ONE;
    }

    /// Whether the state is exactly |0...0⟩
    pub fn is_ground_state(&self) -> bool {
        self.amplitudes[0] == ONE && self.amplitudes[1..].iter().all(|a| *a == ZERO)
    }
}

pub(crate) fn validate_width(num_qubits: usize, limit: usize) -> Result<()> {
    if num_qubits == 0 {
        return Err(StateError::InvalidArgument {
            num_qubits,
            reason: "a register needs at least one qubit".to_string(),
        });
    }
    if num_qubits > limit {
        return Err(StateError::InvalidArgument {
            num_qubits,
            reason: format!("exceeds the {}-qubit limit", limit),
        });
    }
    Ok(())
}
