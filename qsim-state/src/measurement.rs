//! Computational-basis measurement distributions
//!
//! Measurement here never collapses the state and never draws random
//! numbers: it returns the full distribution `p_i = |a_i|²`.

use num_complex::Complex64;

/// Probability of every basis state, in basis-index order
pub fn probabilities(amplitudes: &[Complex64]) -> Vec<f64> {
    amplitudes.iter().map(|a| a.norm_sqr()).collect()
}

/// Probability that `qubit` reads 1
///
/// Caller must ensure `qubit` addresses a bit of the register.
pub fn qubit_one_probability(amplitudes: &[Complex64], qubit: usize) -> f64 {
    let mask = 1usize << qubit;
    amplitudes
        .iter()
        .enumerate()
        .filter(|(index, _)| index & mask != 0)
        .map(|(_, a)| a.norm_sqr())
        .sum()
}

/// Basis index with the largest probability (lowest index on ties)
pub fn most_likely_outcome(amplitudes: &[Complex64]) -> Option<usize> {
    amplitudes
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (index, a)| {
            let p = a.norm_sqr();
            match best {
                Some((_, best_p)) if best_p >= p => best,
                _ => Some((index, p)),
            }
        })
        .map(|(index, _)| index)
}
