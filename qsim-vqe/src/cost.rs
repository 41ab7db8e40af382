//! Distances between two amplitude vectors, used as optimizer loss signals

use crate::error::Result;
use num_complex::Complex64;
use qsim_state::complex::{inner_product, magnitude};
use qsim_state::StateError;

fn check_lengths(a: &[Complex64], b: &[Complex64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(StateError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        }
        .into());
    }
    Ok(())
}

/// `1 - |⟨a|b⟩|`
///
/// Zero for identical normalized states, one for orthogonal states. Global
/// phase does not contribute.
///
/// # Errors
/// Returns `DimensionMismatch` if the vectors differ in length
pub fn fidelity_cost(a: &[Complex64], b: &[Complex64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(1.0 - inner_product(a, b).norm())
}

/// `Σ_i |a_i - b_i|`
///
/// Despite the name this is not an optimal-transport distance: it sums the
/// Euclidean distance between corresponding amplitudes in the complex plane.
/// Unlike [`fidelity_cost`] it is sensitive to global phase.
///
/// # Errors
/// Returns `DimensionMismatch` if the vectors differ in length
pub fn wasserstein_cost(a: &[Complex64], b: &[Complex64]) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| magnitude(x - y)).sum())
}
