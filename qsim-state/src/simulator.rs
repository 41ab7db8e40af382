//! Gate-level simulator over an owned state vector
//!
//! The simulator validates every qubit argument, routes gates to the kernels
//! in [`crate::gates`], and tracks whether the register is still in its
//! initial |0...0⟩ state.

use crate::config::SimulatorConfig;
use crate::error::{Result, StateError};
use crate::gates;
use crate::measurement;
use crate::observable::Hamiltonian;
use crate::state_vector::{validate_width, StateVector};
use num_complex::Complex64;
use tracing::{debug, trace, warn};

/// Lifecycle of the simulated register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatePhase {
    /// Just constructed or reset: the register holds |0...0⟩
    Fresh,
    /// At least one gate has been applied since the last reset
    Evolved,
}

/// Dense state-vector simulator for the {H, RY, RZ, CNOT} gate set
///
/// # Example
///
/// ```
/// use qsim_state::Simulator;
///
/// // Bell state
/// let mut sim = Simulator::new(2).unwrap();
/// sim.apply_hadamard(0).unwrap();
/// sim.apply_cnot(0, 1).unwrap();
///
/// let probs = sim.measure_probabilities();
/// assert!((probs[0] - 0.5).abs() < 1e-12);
/// assert!((probs[3] - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    state: StateVector,
    phase: StatePhase,
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator for `num_qubits` qubits with the default configuration
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `num_qubits` is zero or above the
    /// configured limit
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, SimulatorConfig::default())
    }

    /// Create a simulator with an explicit configuration
    pub fn with_config(num_qubits: usize, config: SimulatorConfig) -> Result<Self> {
        validate_width(num_qubits, config.qubit_limit())?;
        let state = StateVector::new(num_qubits)?;

        debug!(num_qubits, dimension = state.dimension(), "created state-vector simulator");

        Ok(Self {
            state,
            phase: StatePhase::Fresh,
            config,
        })
    }

    /// Start from explicit amplitudes instead of |0...0⟩
    ///
    /// The result is considered `Evolved` unless the amplitudes are exactly
    /// the ground state.
    pub fn from_state(state: StateVector, config: SimulatorConfig) -> Result<Self> {
        validate_width(state.num_qubits(), config.qubit_limit())?;
        if !state.is_normalized(config.norm_tolerance) {
            warn!(norm = state.norm(), "simulator seeded with an unnormalized state");
        }

        let phase = if state.is_ground_state() {
            StatePhase::Fresh
        } else {
            StatePhase::Evolved
        };

        Ok(Self {
            state,
            phase,
            config,
        })
    }

    /// Number of qubits in the register
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    /// Number of amplitudes (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.state.dimension()
    }

    /// Current lifecycle phase
    #[inline]
    pub fn phase(&self) -> StatePhase {
        self.phase
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Borrow the live state
    #[inline]
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Copy of the current state; later gates do not affect it
    pub fn snapshot(&self) -> StateVector {
        self.state.clone()
    }

    /// Restore |0...0⟩ in place
    pub fn reset(&mut self) {
        self.state.reset();
        self.phase = StatePhase::Fresh;
        debug!(num_qubits = self.num_qubits(), "simulator reset");
    }

    /// Apply a Hadamard gate to `qubit`
    ///
    /// # Errors
    /// Returns `QubitIndexOutOfRange` if `qubit >= num_qubits`
    pub fn apply_hadamard(&mut self, qubit: usize) -> Result<()> {
        self.check_qubit(qubit)?;
        trace!(qubit, "H");
        let matrix = gates::hadamard();
        self.evolve(|amplitudes| gates::apply_single_qubit_gate(amplitudes, &matrix, qubit));
        Ok(())
    }

    /// Apply RY(θ) to `qubit`
    ///
    /// # Errors
    /// Returns `QubitIndexOutOfRange` if `qubit >= num_qubits`
    pub fn apply_ry(&mut self, qubit: usize, theta: f64) -> Result<()> {
        self.check_qubit(qubit)?;
        trace!(qubit, theta, "RY");
        let matrix = gates::rotation_y(theta);
        self.evolve(|amplitudes| gates::apply_single_qubit_gate(amplitudes, &matrix, qubit));
        Ok(())
    }

    /// Apply RZ(θ) to `qubit`
    ///
    /// Phase-only: measurement probabilities are unchanged.
    ///
    /// # Errors
    /// Returns `QubitIndexOutOfRange` if `qubit >= num_qubits`
    pub fn apply_rz(&mut self, qubit: usize, theta: f64) -> Result<()> {
        self.check_qubit(qubit)?;
        trace!(qubit, theta, "RZ");
        let diagonal = gates::rotation_z_diagonal(theta);
        self.evolve(|amplitudes| gates::apply_diagonal_gate(amplitudes, diagonal, qubit));
        Ok(())
    }

    /// Apply CNOT with the given control and target
    ///
    /// # Errors
    /// Returns `QubitIndexOutOfRange` if either index is out of range or
    /// `control == target`
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(StateError::QubitIndexOutOfRange {
                index: target,
                num_qubits: self.num_qubits(),
            });
        }

        trace!(control, target, "CNOT");
        self.evolve(|amplitudes| gates::apply_cnot(amplitudes, control, target));
        Ok(())
    }

    /// Full measurement distribution `p_i = |a_i|²`
    pub fn measure_probabilities(&self) -> Vec<f64> {
        measurement::probabilities(self.state.amplitudes())
    }

    /// Probability of a single basis state
    ///
    /// # Errors
    /// Returns `BasisStateOutOfRange` if `basis_state` is not below the dimension
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        self.state
            .amplitudes()
            .get(basis_state)
            .map(|a| a.norm_sqr())
            .ok_or(StateError::BasisStateOutOfRange {
                index: basis_state,
                dimension: self.dimension(),
            })
    }

    /// Marginal probability that `qubit` reads 1
    ///
    /// # Errors
    /// Returns `QubitIndexOutOfRange` if `qubit >= num_qubits`
    pub fn qubit_probability(&self, qubit: usize) -> Result<f64> {
        self.check_qubit(qubit)?;
        Ok(measurement::qubit_one_probability(self.state.amplitudes(), qubit))
    }

    /// Basis index with the highest probability
    pub fn most_likely_outcome(&self) -> usize {
        measurement::most_likely_outcome(self.state.amplitudes()).unwrap_or(0)
    }

    /// Expectation value `⟨ψ|H|ψ⟩`
    ///
    /// Returns the real part. An imaginary residue above
    /// `config.hermiticity_tolerance` is logged, since it means `H` is not
    /// Hermitian. O(4^n) for non-diagonal observables.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `H` is not `2^n × 2^n`
    pub fn expectation_value(&self, hamiltonian: &Hamiltonian) -> Result<f64> {
        let dimension = self.dimension();
        if hamiltonian.dimension() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: hamiltonian.dimension(),
            });
        }

        let value = hamiltonian.expectation(self.state.amplitudes())?;
        if value.im.abs() > self.config.hermiticity_tolerance {
            warn!(
                imaginary = value.im,
                tolerance = self.config.hermiticity_tolerance,
                "expectation value has an imaginary component; observable is not Hermitian"
            );
        }

        Ok(value.re)
    }

    /// Whether the norm is within `config.norm_tolerance` of 1
    pub fn is_normalized(&self) -> bool {
        self.state.is_normalized(self.config.norm_tolerance)
    }

    fn check_qubit(&self, qubit: usize) -> Result<()> {
        let num_qubits = self.num_qubits();
        if qubit >= num_qubits {
            return Err(StateError::QubitIndexOutOfRange {
                index: qubit,
                num_qubits,
            });
        }
        Ok(())
    }

    /// Single mutation point for every gate
    fn evolve<F>(&mut self, kernel: F)
    where
        F: FnOnce(&mut [Complex64]),
    {
        kernel(self.state.amplitudes_mut());
        self.phase = StatePhase::Evolved;

        if self.config.check_norm {
            let total = self.state.total_probability();
            if (total - 1.0).abs() > self.config.norm_tolerance {
                warn!(
                    total_probability = total,
                    tolerance = self.config.norm_tolerance,
                    "state norm drifted after gate application"
                );
            }
        }
    }
}
