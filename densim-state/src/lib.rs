//! Dense state-vector simulation for densim
//!
//! This crate owns the full `2^N` complex amplitude vector of an N-qubit
//! register and evolves it under gate unitaries and signed Pauli strings.
//!
//! # Operations
//!
//! - **Generic k-qubit apply**: any `2^k × 2^k` [`GateMatrix`] on any ordered
//!   list of distinct qubit positions
//! - **Named apply**: single- and two-qubit gates looked up in a [`GateCatalog`]
//! - **Pauli strings**: a signed product of Paulis at a qubit offset
//!
//! Gate application walks every "fiber" (the `2^k` amplitudes that differ only
//! in the target bits) and multiplies it by the matrix. Fibers are disjoint,
//! so larger registers process them on the rayon thread pool.
//!
//! # Example
//!
//! ```
//! use densim_state::{PauliString, VectorEngine};
//!
//! let mut engine = VectorEngine::new(3).unwrap();
//! engine.apply_gate("H", 0).unwrap();
//! engine.apply_gate2("CNOT", 0, 1).unwrap();
//!
//! let pauli: PauliString = "-X_".parse().unwrap();
//! engine.apply_pauli(&pauli, 1).unwrap();
//!
//! assert!((engine.norm() - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod engine;
pub mod error;
mod kernel;
pub mod pauli;

pub use config::{EngineConfig, MAX_SUPPORTED_QUBITS};
pub use densim_gates::{GateCatalog, GateCatalogBuilder, GateError, GateMatrix};
pub use engine::{VectorEngine, APPROX_TOLERANCE};
pub use error::{ApplicationError, PauliParseError, Result, StateError};
pub use pauli::{Pauli, PauliString};
