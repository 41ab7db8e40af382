//! Dense Hermitian observables and expectation values
//!
//! An observable is a square complex matrix stored row-major. For an n-qubit
//! register it must be `2^n × 2^n`; the expectation value
//!
//! ```text
//! ⟨ψ|H|ψ⟩ = Σ_i Σ_j conj(ψ_i) · H_ij · ψ_j
//! ```
//!
//! touches every matrix entry, so evaluation is O(4^n) and only practical for
//! small registers.

use crate::complex::{add, conj_multiply, multiply, ONE, ZERO};
use crate::config::MAX_SUPPORTED_QUBITS;
use crate::error::{Result, StateError};
use crate::state_vector::validate_width;
use num_complex::Complex64;

/// Square observable matrix
#[derive(Debug, Clone, PartialEq)]
pub struct Hamiltonian {
    dimension: usize,
    entries: Vec<Complex64>,
}

impl Hamiltonian {
    /// Build from complex rows
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if any row length differs from the row count
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self> {
        let dimension = rows.len();
        let mut entries = Vec::with_capacity(dimension * dimension);

        for row in rows {
            if row.len() != dimension {
                return Err(StateError::DimensionMismatch {
                    expected: dimension,
                    actual: row.len(),
                });
            }
            entries.extend(row);
        }

        Ok(Self { dimension, entries })
    }

    /// Build from real rows, the usual form of a VQE cost observable
    ///
    /// # Example
    /// ```
    /// use qsim_state::Hamiltonian;
    ///
    /// // Pauli X
    /// let x = Hamiltonian::from_real_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    /// assert_eq!(x.num_qubits(), Some(1));
    /// ```
    pub fn from_real_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(|x| Complex64::new(x, 0.0)).collect())
                .collect(),
        )
    }

    /// Diagonal observable with the given real eigenvalues
    ///
    /// # Errors
    /// Returns `ObservableTooLarge` if the dense matrix cannot be allocated
    pub fn diagonal(values: &[f64]) -> Result<Self> {
        let dimension = values.len();
        let mut entries = zeroed_entries(dimension)?;
        for (i, &value) in values.iter().enumerate() {
            entries[i * dimension + i] = Complex64::new(value, 0.0);
        }
        Ok(Self { dimension, entries })
    }

    /// Diagonal observable on an n-qubit register, entry `i` given by `eigenvalue(i)`
    ///
    /// The matrix is allocated before any eigenvalue is computed, so an
    /// oversized register fails fast.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for zero qubits or more than
    /// [`MAX_SUPPORTED_QUBITS`], and `ObservableTooLarge` if the dense matrix
    /// cannot be allocated
    pub fn diagonal_from_fn<F>(num_qubits: usize, mut eigenvalue: F) -> Result<Self>
    where
        F: FnMut(usize) -> f64,
    {
        validate_width(num_qubits, MAX_SUPPORTED_QUBITS)?;
        let dimension = 1usize << num_qubits;
        let mut entries = zeroed_entries(dimension)?;
        for i in 0..dimension {
            entries[i * dimension + i] = Complex64::new(eigenvalue(i), 0.0);
        }
        Ok(Self { dimension, entries })
    }

    /// Identity on an n-qubit register
    ///
    /// # Errors
    /// Same as [`Hamiltonian::diagonal_from_fn`]
    pub fn identity(num_qubits: usize) -> Result<Self> {
        validate_width(num_qubits, MAX_SUPPORTED_QUBITS)?;
        let dimension = 1usize << num_qubits;
        let mut entries = zeroed_entries(dimension)?;
        for i in 0..dimension {
            entries[i * dimension + i] = ONE;
        }
        Ok(Self { dimension, entries })
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Register width this observable acts on, if the dimension is a power of two
    pub fn num_qubits(&self) -> Option<usize> {
        if self.dimension.is_power_of_two() {
            Some(self.dimension.trailing_zeros() as usize)
        } else {
            None
        }
    }

    /// Entry `H[row][col]`
    pub fn get(&self, row: usize, col: usize) -> Option<Complex64> {
        if row < self.dimension && col < self.dimension {
            Some(self.entries[row * self.dimension + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice
    #[inline]
    fn row(&self, i: usize) -> &[Complex64] {
        &self.entries[i * self.dimension..(i + 1) * self.dimension]
    }

    /// Whether `H[i][j] ≈ conj(H[j][i])` for every entry
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (0..self.dimension).all(|i| {
            (i..self.dimension).all(|j| {
                let upper = self.entries[i * self.dimension + j];
                let lower = self.entries[j * self.dimension + i];
                (upper - lower.conj()).norm() <= tolerance
            })
        })
    }

    /// Whether every off-diagonal entry is exactly zero
    pub fn is_diagonal(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(k, entry)| k / self.dimension == k % self.dimension || *entry == ZERO)
    }

    /// Raw `⟨ψ|H|ψ⟩` including its imaginary residue
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `amplitudes.len()` differs from the
    /// matrix dimension
    pub fn expectation(&self, amplitudes: &[Complex64]) -> Result<Complex64> {
        if amplitudes.len() != self.dimension {
            return Err(StateError::DimensionMismatch {
                expected: amplitudes.len(),
                actual: self.dimension,
            });
        }

        if self.is_diagonal() {
            // Fast path: only H_ii contributes
            let value = amplitudes.iter().enumerate().fold(ZERO, |acc, (i, a)| {
                add(acc, self.entries[i * self.dimension + i] * a.norm_sqr())
            });
            return Ok(value);
        }

        let mut expectation = ZERO;
        for (i, &bra) in amplitudes.iter().enumerate() {
            let h_psi = self
                .row(i)
                .iter()
                .zip(amplitudes)
                .fold(ZERO, |acc, (&h, &ket)| add(acc, multiply(h, ket)));
            expectation = add(expectation, conj_multiply(bra, h_psi));
        }

        Ok(expectation)
    }
}

// Zero-filled `dimension × dimension` storage, or `ObservableTooLarge`
fn zeroed_entries(dimension: usize) -> Result<Vec<Complex64>> {
    let too_large = || StateError::ObservableTooLarge { dimension };
    let len = dimension.checked_mul(dimension).ok_or_else(too_large)?;

    let mut entries = Vec::new();
    entries.try_reserve_exact(len).map_err(|_| too_large())?;
    entries.resize(len, ZERO);
    Ok(entries)
}
