//! Scan the Z₀Z₁ energy landscape along one ansatz angle
//!
//! A real optimizer would drive these evaluations; here we sweep the first
//! rotation on qubit 1 and report energy plus distance to the ground state.

use qsim_state::StateVector;
use qsim_vqe::{build_simple_hamiltonian, EnergyEvaluator};
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const NUM_QUBITS: usize = 4;
    const STEPS: usize = 12;

    println!("=== Z0Z1 energy scan ({} qubits) ===\n", NUM_QUBITS);

    let hamiltonian = build_simple_hamiltonian(NUM_QUBITS)?;
    let mut evaluator = EnergyEvaluator::new(NUM_QUBITS, hamiltonian)?;
    let ground = StateVector::new(NUM_QUBITS)?;

    println!("{:>8}  {:>10}  {:>10}  {:>12}", "theta", "energy", "fidelity", "wasserstein");
    for step in 0..=STEPS {
        let theta = 2.0 * PI * step as f64 / STEPS as f64;
        let mut params = vec![0.0; evaluator.parameter_count()];
        params[NUM_QUBITS + 1] = theta;

        let energy = evaluator.energy(&params)?;
        let fidelity = evaluator.fidelity_cost_to(ground.amplitudes(), &params)?;
        let wasserstein = evaluator.wasserstein_cost_to(ground.amplitudes(), &params)?;

        println!("{:>8.4}  {:>+10.6}  {:>10.6}  {:>12.6}", theta, energy, fidelity, wasserstein);
    }

    println!("\n{} ansatz evaluations", evaluator.evaluations());
    Ok(())
}
