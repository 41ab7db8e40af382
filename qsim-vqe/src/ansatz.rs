//! Hardware-efficient ansatz used for VQE
//!
//! The circuit has three fixed layers on an n-qubit register:
//!
//! 1. `RY(q, θ[q])` on every qubit
//! 2. a linear CNOT chain `CNOT(0,1), CNOT(1,2), …, CNOT(n-2,n-1)`
//! 3. `RY(q, θ[n + q])` on every qubit
//!
//! giving `2n` trainable angles.

use crate::error::{Result, VqeError};
use qsim_state::Simulator;
use tracing::trace;

/// Number of angles the ansatz consumes on an n-qubit register
#[inline]
pub fn ansatz_parameter_count(num_qubits: usize) -> usize {
    2 * num_qubits
}

/// Apply the ansatz to `simulator` with the given angles
///
/// The register width is taken from the simulator. Gates are applied on top
/// of whatever state the simulator currently holds; reset first for a clean
/// evaluation.
///
/// # Errors
/// Returns `ParameterCountMismatch` if `parameters.len() != 2 * num_qubits`;
/// nothing is applied in that case
///
/// # Example
/// ```
/// use qsim_state::Simulator;
/// use qsim_vqe::build_ansatz_circuit;
///
/// let mut sim = Simulator::new(4).unwrap();
/// build_ansatz_circuit(&mut sim, &[0.1; 8]).unwrap();
/// assert!(sim.is_normalized());
/// ```
pub fn build_ansatz_circuit(simulator: &mut Simulator, parameters: &[f64]) -> Result<()> {
    let num_qubits = simulator.num_qubits();
    let expected = ansatz_parameter_count(num_qubits);
    if parameters.len() != expected {
        return Err(VqeError::ParameterCountMismatch {
            expected,
            actual: parameters.len(),
        });
    }

    trace!(num_qubits, "applying ansatz");
    let (first_layer, second_layer) = parameters.split_at(num_qubits);

    for (qubit, &theta) in first_layer.iter().enumerate() {
        simulator.apply_ry(qubit, theta)?;
    }

    for qubit in 0..num_qubits.saturating_sub(1) {
        simulator.apply_cnot(qubit, qubit + 1)?;
    }

    for (qubit, &theta) in second_layer.iter().enumerate() {
        simulator.apply_ry(qubit, theta)?;
    }

    Ok(())
}
