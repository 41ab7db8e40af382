//! Cost evaluation for an external VQE optimizer loop
//!
//! Every cost evaluation in a VQE iteration is the same sequence: reset the
//! register, apply the ansatz with the candidate angles, then reduce the state
//! to a scalar. [`EnergyEvaluator`] owns the simulator and observable so an
//! optimizer only hands in parameter vectors.

use crate::ansatz::{ansatz_parameter_count, build_ansatz_circuit};
use crate::cost::{fidelity_cost, wasserstein_cost};
use crate::error::Result;
use num_complex::Complex64;
use qsim_state::{Hamiltonian, Simulator, SimulatorConfig, StateError, StateVector};
use tracing::trace;

/// Reusable ansatz + observable evaluator
#[derive(Debug, Clone)]
pub struct EnergyEvaluator {
    simulator: Simulator,
    hamiltonian: Hamiltonian,
    evaluations: usize,
}

impl EnergyEvaluator {
    /// Create an evaluator with the default simulator configuration
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an unusable register width and
    /// `DimensionMismatch` if `hamiltonian` is not `2^n × 2^n`
    pub fn new(num_qubits: usize, hamiltonian: Hamiltonian) -> Result<Self> {
        Self::with_config(num_qubits, hamiltonian, SimulatorConfig::default())
    }

    /// Create an evaluator with an explicit simulator configuration
    pub fn with_config(
        num_qubits: usize,
        hamiltonian: Hamiltonian,
        config: SimulatorConfig,
    ) -> Result<Self> {
        let simulator = Simulator::with_config(num_qubits, config)?;
        if hamiltonian.dimension() != simulator.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: simulator.dimension(),
                actual: hamiltonian.dimension(),
            }
            .into());
        }

        Ok(Self {
            simulator,
            hamiltonian,
            evaluations: 0,
        })
    }

    /// Register width
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.simulator.num_qubits()
    }

    /// Angles expected per evaluation
    #[inline]
    pub fn parameter_count(&self) -> usize {
        ansatz_parameter_count(self.num_qubits())
    }

    /// Observable being minimized
    #[inline]
    pub fn hamiltonian(&self) -> &Hamiltonian {
        &self.hamiltonian
    }

    /// State produced by the most recent evaluation
    #[inline]
    pub fn state(&self) -> &StateVector {
        self.simulator.state()
    }

    /// Number of ansatz evaluations performed so far
    #[inline]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// `⟨ψ(θ)|H|ψ(θ)⟩` for the given angles
    ///
    /// # Errors
    /// Returns `ParameterCountMismatch` if `parameters.len() != 2n`
    pub fn energy(&mut self, parameters: &[f64]) -> Result<f64> {
        self.prepare(parameters)?;
        let energy = self.simulator.expectation_value(&self.hamiltonian)?;
        trace!(evaluation = self.evaluations, energy, "energy evaluated");
        Ok(energy)
    }

    /// Energies for several parameter vectors, evaluated in order
    pub fn batch_energy(&mut self, batch: &[Vec<f64>]) -> Result<Vec<f64>> {
        batch.iter().map(|parameters| self.energy(parameters)).collect()
    }

    /// [`fidelity_cost`] between `ψ(θ)` and `target`
    pub fn fidelity_cost_to(&mut self, target: &[Complex64], parameters: &[f64]) -> Result<f64> {
        self.prepare(parameters)?;
        fidelity_cost(self.simulator.state().amplitudes(), target)
    }

    /// [`wasserstein_cost`] between `ψ(θ)` and `target`
    pub fn wasserstein_cost_to(&mut self, target: &[Complex64], parameters: &[f64]) -> Result<f64> {
        self.prepare(parameters)?;
        wasserstein_cost(self.simulator.state().amplitudes(), target)
    }

    fn prepare(&mut self, parameters: &[f64]) -> Result<()> {
        self.simulator.reset();
        build_ansatz_circuit(&mut self.simulator, parameters)?;
        self.evaluations += 1;
        Ok(())
    }
}
