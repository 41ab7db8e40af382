//! Variational circuit helpers on top of `qsim-state`
//!
//! This crate provides the pieces a VQE optimizer loop calls into:
//!
//! - [`build_ansatz_circuit`]: two RY layers around a linear CNOT chain
//! - [`build_simple_hamiltonian`]: the diagonal Z₀Z₁ cost observable
//! - [`fidelity_cost`] / [`wasserstein_cost`]: distances between states
//! - [`EnergyEvaluator`]: reset → ansatz → expectation in one call
//!
//! The optimizer itself (gradient estimation, parameter updates, scheduling)
//! lives with the caller.
//!
//! # Example
//!
//! ```
//! use qsim_vqe::{build_simple_hamiltonian, EnergyEvaluator};
//!
//! let hamiltonian = build_simple_hamiltonian(4).unwrap();
//! let mut evaluator = EnergyEvaluator::new(4, hamiltonian).unwrap();
//!
//! let energy = evaluator.energy(&[0.0; 8]).unwrap();
//! assert!((energy - 1.0).abs() < 1e-12);
//! ```

pub mod ansatz;
pub mod cost;
pub mod energy;
pub mod error;
pub mod hamiltonian;

pub use ansatz::{ansatz_parameter_count, build_ansatz_circuit};
pub use cost::{fidelity_cost, wasserstein_cost};
pub use energy::EnergyEvaluator;
pub use error::{Result, VqeError};
pub use hamiltonian::build_simple_hamiltonian;
