//! Scalar complex arithmetic used by the gate kernels and inner products
//!
//! Amplitudes are plain [`Complex64`] values. The helpers here name the
//! handful of operations the simulator relies on so kernels read the same
//! way the math is written.

use num_complex::Complex64;

/// Complex zero
pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Complex one
pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// `a + b`
#[inline]
pub fn add(a: Complex64, b: Complex64) -> Complex64 {
    a + b
}

/// `a · b`
#[inline]
pub fn multiply(a: Complex64, b: Complex64) -> Complex64 {
    a * b
}

/// `sqrt(re² + im²)`
#[inline]
pub fn magnitude(a: Complex64) -> f64 {
    a.norm()
}

/// `conj(a) · b`, the term of a bra-ket inner product
#[inline]
pub fn conj_multiply(a: Complex64, b: Complex64) -> Complex64 {
    a.conj() * b
}

/// Inner product `⟨a|b⟩ = Σ conj(a_i) · b_i`
///
/// Slices are zipped, so the caller is responsible for matching lengths.
pub fn inner_product(a: &[Complex64], b: &[Complex64]) -> Complex64 {
    a.iter()
        .zip(b.iter())
        .fold(ZERO, |acc, (&x, &y)| add(acc, conj_multiply(x, y)))
}
