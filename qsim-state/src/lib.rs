//! Dense quantum state-vector simulation
//!
//! This crate represents an n-qubit register as its full `2^n` complex
//! amplitude vector and evolves it with the H, RY, RZ and CNOT gates.
//! Measurement returns the complete probability distribution rather than a
//! sampled outcome, and dense observables yield `⟨ψ|H|ψ⟩` directly.
//!
//! # Bit ordering
//!
//! Basis index `i` assigns qubit `q` the bit `(i >> q) & 1`. Qubit 0 is the
//! least significant bit, so on two qubits `|q1 q0⟩ = |10⟩` is index 2.
//!
//! # Example
//!
//! ```
//! use qsim_state::{Hamiltonian, Simulator};
//!
//! let mut sim = Simulator::new(2).unwrap();
//! sim.apply_hadamard(0).unwrap();
//! sim.apply_cnot(0, 1).unwrap();
//!
//! // ZZ on a Bell pair is +1
//! let zz = Hamiltonian::diagonal(&[1.0, -1.0, -1.0, 1.0]).unwrap();
//! let energy = sim.expectation_value(&zz).unwrap();
//! assert!((energy - 1.0).abs() < 1e-12);
//! ```

pub mod complex;
pub mod config;
pub mod error;
pub mod gates;
pub mod measurement;
pub mod observable;
pub mod simulator;
pub mod state_vector;

pub use config::{SimulatorConfig, MAX_SUPPORTED_QUBITS};
pub use error::{Result, StateError};
pub use num_complex::Complex64;
pub use observable::Hamiltonian;
pub use simulator::{Simulator, StatePhase};
pub use state_vector::StateVector;
