//! Observable builders for VQE cost functions

use crate::error::Result;
use qsim_state::Hamiltonian;

/// Diagonal Z₀Z₁ observable on an n-qubit register
///
/// Entry `i` is `+1` when qubits 0 and 1 agree in basis state `i` and `-1`
/// otherwise. On a single qubit, qubit 1 reads as 0 everywhere and the result
/// is plain Z₀. The matrix is stored densely, so memory grows as 4^n.
///
/// # Errors
/// Returns `InvalidArgument` for zero qubits or more than
/// [`MAX_SUPPORTED_QUBITS`](qsim_state::MAX_SUPPORTED_QUBITS), and
/// `ObservableTooLarge` if the dense matrix cannot be allocated
///
/// # Example
/// ```
/// use qsim_vqe::build_simple_hamiltonian;
///
/// let h = build_simple_hamiltonian(2).unwrap();
/// assert_eq!(h.get(1, 1).unwrap().re, -1.0);
/// assert_eq!(h.get(3, 3).unwrap().re, 1.0);
/// ```
pub fn build_simple_hamiltonian(num_qubits: usize) -> Result<Hamiltonian> {
    let hamiltonian = Hamiltonian::diagonal_from_fn(num_qubits, |i| {
        let bit0 = i & 1;
        let bit1 = (i >> 1) & 1;
        if bit0 == bit1 {
            1.0
        } else {
            -1.0
        }
    })?;

    Ok(hamiltonian)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VqeError;
    use qsim_state::{Complex64, StateError, MAX_SUPPORTED_QUBITS};

    #[test]
    fn test_two_qubit_zz() {
        let h = build_simple_hamiltonian(2).unwrap();
        let diagonal: Vec<f64> = (0..4).map(|i| h.get(i, i).unwrap().re).collect();
        assert_eq!(diagonal, vec![1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_higher_qubits_do_not_matter() {
        let h = build_simple_hamiltonian(4).unwrap();
        assert_eq!(h.dimension(), 16);
        for i in 0..16 {
            // Flipping qubit 3 leaves the eigenvalue unchanged
            assert_eq!(h.get(i, i), h.get(i ^ 0b1000, i ^ 0b1000));
        }
    }

    #[test]
    fn test_off_diagonal_is_zero() {
        let h = build_simple_hamiltonian(3).unwrap();
        assert!(h.is_diagonal());
        assert!(h.is_hermitian(0.0));
        assert_eq!(h.get(0, 1), Some(Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_single_qubit_is_z() {
        let h = build_simple_hamiltonian(1).unwrap();
        assert_eq!(h.get(0, 0).unwrap().re, 1.0);
        assert_eq!(h.get(1, 1).unwrap().re, -1.0);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            build_simple_hamiltonian(0),
            Err(VqeError::State(StateError::InvalidArgument { num_qubits: 0, .. }))
        ));
    }

    #[test]
    fn test_too_many_qubits_rejected() {
        for num_qubits in [MAX_SUPPORTED_QUBITS + 1, 64, 128] {
            assert!(matches!(
                build_simple_hamiltonian(num_qubits),
                Err(VqeError::State(StateError::InvalidArgument { .. }))
            ));
        }
    }

    #[test]
    fn test_unallocatable_matrix_rejected() {
        assert_eq!(
            build_simple_hamiltonian(MAX_SUPPORTED_QUBITS),
            Err(VqeError::State(StateError::ObservableTooLarge {
                dimension: 1 << MAX_SUPPORTED_QUBITS
            }))
        );
    }
}
