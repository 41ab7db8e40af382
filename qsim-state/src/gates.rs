//! Gate matrices and the kernels that apply them to an amplitude slice
//!
//! Kernels are free functions over `&mut [Complex64]` and do no argument
//! checking: the caller must ensure `state.len()` is a power of two and that
//! every qubit index addresses a bit below `log2(state.len())`.
//! [`Simulator`](crate::Simulator) performs that validation before dispatching
//! here.
//!
//! Supported gates are H, RY(θ), RZ(θ) and CNOT. H and RY go through the
//! general 2×2 pair kernel, RZ through the diagonal kernel, CNOT is a pure
//! permutation.

use crate::complex::{add, multiply};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Hadamard matrix `1/√2 [[1, 1], [1, -1]]`
pub fn hadamard() -> [[Complex64; 2]; 2] {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// RY(θ) = `[[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]`
pub fn rotation_y(theta: f64) -> [[Complex64; 2]; 2] {
    let half_theta = theta / 2.0;
    let cos_val = Complex64::new(half_theta.cos(), 0.0);
    let sin_val = Complex64::new(half_theta.sin(), 0.0);

    [[cos_val, -sin_val], [sin_val, cos_val]]
}

/// Diagonal of RZ(θ) = `diag(e^{-iθ/2}, e^{iθ/2})`
pub fn rotation_z_diagonal(theta: f64) -> [Complex64; 2] {
    let half_theta = theta / 2.0;
    [
        Complex64::new(half_theta.cos(), -half_theta.sin()),
        Complex64::new(half_theta.cos(), half_theta.sin()),
    ]
}

/// Apply a 2×2 matrix to every amplitude pair that differs only in `qubit`
///
/// For each index `i` with the qubit bit clear and `j = i | (1 << qubit)`:
/// `a_i' = m00·a_i + m01·a_j`, `a_j' = m10·a_i + m11·a_j`.
pub fn apply_single_qubit_gate(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    qubit: usize,
) {
    let qubit_mask = 1usize << qubit;

    let [[m00, m01], [m10, m11]] = *matrix;

    for i in 0..state.len() {
        if i & qubit_mask != 0 {
            continue;
        }

        let j = i | qubit_mask;
        let amp0 = state[i];
        let amp1 = state[j];

        state[i] = add(multiply(m00, amp0), multiply(m01, amp1));
        state[j] = add(multiply(m10, amp0), multiply(m11, amp1));
    }
}

/// Multiply each amplitude by `diagonal[bit]`, where `bit` is the value of `qubit`
pub fn apply_diagonal_gate(state: &mut [Complex64], diagonal: [Complex64; 2], qubit: usize) {
    let stride = 1usize << qubit;

    for base in (0..state.len()).step_by(2 * stride) {
        for amplitude in &mut state[base..base + stride] {
            *amplitude = multiply(*amplitude, diagonal[0]);
        }
        for amplitude in &mut state[base + stride..base + 2 * stride] {
            *amplitude = multiply(*amplitude, diagonal[1]);
        }
    }
}

/// Swap amplitudes across the target bit wherever the control bit is set
///
/// Only indices with the target bit clear initiate a swap, so each pair is
/// visited exactly once.
pub fn apply_cnot(state: &mut [Complex64], control: usize, target: usize) {
    let mask_control = 1usize << control;
    let mask_target = 1usize << target;

    for i in 0..state.len() {
        if i & mask_control != 0 && i & mask_target == 0 {
            state.swap(i, i | mask_target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{ONE, ZERO};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    fn assert_state_eq(actual: &[Complex64], expected: &[Complex64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a.re, e.re, epsilon = EPSILON);
            assert_relative_eq!(a.im, e.im, epsilon = EPSILON);
        }
    }

    // Dense 2^n × 2^n unitary of a single-qubit gate embedded at `qubit`
    fn embed_single_qubit_gate(
        matrix: &[[Complex64; 2]; 2],
        qubit: usize,
        num_qubits: usize,
    ) -> Vec<Vec<Complex64>> {
        let dimension = 1usize << num_qubits;
        let mask = 1usize << qubit;
        let mut full = vec![vec![ZERO; dimension]; dimension];

        for (row, full_row) in full.iter_mut().enumerate() {
            for (col, entry) in full_row.iter_mut().enumerate() {
                // Every other qubit must match for a non-zero entry
                if row & !mask == col & !mask {
                    let r = (row >> qubit) & 1;
                    let c = (col >> qubit) & 1;
                    *entry = matrix[r][c];
                }
            }
        }

        full
    }

    fn matvec(matrix: &[Vec<Complex64>], state: &[Complex64]) -> Vec<Complex64> {
        matrix
            .iter()
            .map(|row| row.iter().zip(state).map(|(m, a)| m * a).sum())
            .collect()
    }

    // Helper to check if matrix is unitary (U†U = I)
    fn is_unitary_2x2(m: &[[Complex64; 2]; 2]) -> bool {
        for i in 0..2 {
            for j in 0..2 {
                let entry = m[0][i].conj() * m[0][j] + m[1][i].conj() * m[1][j];
                let expected = if i == j { ONE } else { ZERO };
                if (entry - expected).norm() > EPSILON {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_gate_matrices_are_unitary() {
        assert!(is_unitary_2x2(&hadamard()));
        for theta in [0.0, 0.3, PI / 2.0, PI, 5.1] {
            assert!(is_unitary_2x2(&rotation_y(theta)));
            let [d0, d1] = rotation_z_diagonal(theta);
            assert_relative_eq!(d0.norm(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(d1.norm(), 1.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_hadamard_on_zero() {
        let mut state = vec![ONE, ZERO];
        apply_single_qubit_gate(&mut state, &hadamard(), 0);

        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert_state_eq(&state, &[h, h]);
    }

    #[test]
    fn test_hadamard_on_one_has_negative_branch() {
        let mut state = vec![ZERO, ONE];
        apply_single_qubit_gate(&mut state, &hadamard(), 0);

        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert_state_eq(&state, &[h, -h]);
    }

    #[test]
    fn test_ry_pi_flips_zero_to_one() {
        let mut state = vec![ONE, ZERO];
        apply_single_qubit_gate(&mut state, &rotation_y(PI), 0);
        assert_state_eq(&state, &[ZERO, ONE]);
    }

    #[test]
    fn test_ry_matches_standard_matrix() {
        // RY(θ)|1⟩ = -sin(θ/2)|0⟩ + cos(θ/2)|1⟩
        let theta = 0.8;
        let mut state = vec![ZERO, ONE];
        apply_single_qubit_gate(&mut state, &rotation_y(theta), 0);

        let expected = [
            Complex64::new(-(theta / 2.0).sin(), 0.0),
            Complex64::new((theta / 2.0).cos(), 0.0),
        ];
        assert_state_eq(&state, &expected);
    }

    #[test]
    fn test_rz_applies_opposite_phases() {
        let theta = PI / 3.0;
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let mut state = vec![h, h];
        apply_diagonal_gate(&mut state, rotation_z_diagonal(theta), 0);

        let expected = [
            h * Complex64::from_polar(1.0, -theta / 2.0),
            h * Complex64::from_polar(1.0, theta / 2.0),
        ];
        assert_state_eq(&state, &expected);
    }

    #[test]
    fn test_cnot_permutes_basis_states() {
        // |01⟩ (control qubit 0 set) -> |11⟩
        let mut state = vec![ZERO, ONE, ZERO, ZERO];
        apply_cnot(&mut state, 0, 1);
        assert_eq!(state, vec![ZERO, ZERO, ZERO, ONE]);

        // Control clear: untouched
        let mut state = vec![ZERO, ZERO, ONE, ZERO];
        apply_cnot(&mut state, 0, 1);
        assert_eq!(state, vec![ZERO, ZERO, ONE, ZERO]);
    }

    #[test]
    fn test_cnot_with_high_control() {
        // control = qubit 2, target = qubit 0; |100⟩ -> |101⟩
        let mut state = vec![ZERO; 8];
        state[0b100] = ONE;
        apply_cnot(&mut state, 2, 0);
        assert_eq!(state[0b101], ONE);
        assert_eq!(state[0b100], ZERO);
    }

    #[test]
    fn test_kernels_agree_with_dense_unitary() {
        let num_qubits = 3;
        let state: Vec<Complex64> = (0..8)
            .map(|i| Complex64::new(0.1 * i as f64, 0.05 * (7 - i) as f64))
            .collect();

        for qubit in 0..num_qubits {
            let matrix = rotation_y(0.7 + qubit as f64);
            let expected = matvec(&embed_single_qubit_gate(&matrix, qubit, num_qubits), &state);

            let mut actual = state.clone();
            apply_single_qubit_gate(&mut actual, &matrix, qubit);
            assert_state_eq(&actual, &expected);

            let [d0, d1] = rotation_z_diagonal(1.3);
            let diagonal_matrix = [[d0, ZERO], [ZERO, d1]];
            let expected =
                matvec(&embed_single_qubit_gate(&diagonal_matrix, qubit, num_qubits), &state);

            let mut actual = state.clone();
            apply_diagonal_gate(&mut actual, [d0, d1], qubit);
            assert_state_eq(&actual, &expected);
        }
    }
}
