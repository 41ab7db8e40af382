//! Prepare a Bell pair and inspect it
//!
//! Shows the full probability distribution, the effect of a phase-only RZ,
//! and ZZ / XX expectation values on the entangled state.

use qsim_state::{Hamiltonian, Simulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bell State ===\n");

    let mut sim = Simulator::new(2)?;
    sim.apply_hadamard(0)?;
    sim.apply_cnot(0, 1)?;

    print_distribution(&sim);

    let zz = Hamiltonian::diagonal(&[1.0, -1.0, -1.0, 1.0])?;
    let xx = Hamiltonian::from_real_rows(vec![
        vec![0.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0],
    ])?;

    println!("⟨ZZ⟩ = {:+.6}", sim.expectation_value(&zz)?);
    println!("⟨XX⟩ = {:+.6}", sim.expectation_value(&xx)?);

    println!("\nAfter RZ(π/2) on qubit 0:");
    sim.apply_rz(0, std::f64::consts::FRAC_PI_2)?;
    print_distribution(&sim);
    println!("⟨ZZ⟩ = {:+.6}", sim.expectation_value(&zz)?);
    println!("⟨XX⟩ = {:+.6}", sim.expectation_value(&xx)?);

    Ok(())
}

fn print_distribution(sim: &Simulator) {
    let width = sim.num_qubits();
    for (index, p) in sim.measure_probabilities().iter().enumerate() {
        println!("  |{:0width$b}⟩  {:.4}", index, p, width = width);
    }
}
