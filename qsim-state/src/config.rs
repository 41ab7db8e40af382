//! Simulator configuration

/// Hard ceiling on register width; 2^30 amplitudes is 16 GiB of `Complex64`.
pub const MAX_SUPPORTED_QUBITS: usize = 30;

/// Configuration for the state-vector simulator
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Largest register `Simulator::new` accepts
    ///
    /// Dense simulation needs 2^n amplitudes and `expectation_value` is
    /// O(4^n), so keep this small. Clamped to [`MAX_SUPPORTED_QUBITS`].
    ///
    /// Default: 24
    pub max_qubits: usize,

    /// Allowed deviation of `Σ|a_i|²` from 1.0
    ///
    /// Default: 1e-9
    pub norm_tolerance: f64,

    /// Check the norm after every gate and warn on drift
    ///
    /// Default: enabled in debug builds only
    pub check_norm: bool,

    /// Largest imaginary residue of `⟨ψ|H|ψ⟩` accepted silently
    ///
    /// A larger residue means the supplied observable is not Hermitian.
    ///
    /// Default: 1e-9
    pub hermiticity_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 24,
            norm_tolerance: 1e-9,
            check_norm: cfg!(debug_assertions),
            hermiticity_tolerance: 1e-9,
        }
    }
}

impl SimulatorConfig {
    /// Set the register width limit
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits.min(MAX_SUPPORTED_QUBITS);
        self
    }

    /// Set the norm drift tolerance
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    /// Enable or disable per-gate norm checks
    pub fn with_norm_check(mut self, enabled: bool) -> Self {
        self.check_norm = enabled;
        self
    }

    /// Set the Hermiticity residue tolerance
    pub fn with_hermiticity_tolerance(mut self, tolerance: f64) -> Self {
        self.hermiticity_tolerance = tolerance;
        self
    }

    /// Effective register limit after clamping
    pub fn qubit_limit(&self) -> usize {
        self.max_qubits.min(MAX_SUPPORTED_QUBITS)
    }
}
