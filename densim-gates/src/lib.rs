//! Gate catalog for densim
//!
//! This crate holds the fixed table of named unitaries used by the state
//! vector engine, together with the [`GateMatrix`] container those unitaries
//! are stored in. It has no behavior beyond lookup and a few matrix helpers.
//!
//! # Catalog
//!
//! - **Paulis**: `I`, `X`, `Y`, `Z`
//! - **Axis exchange**: `H` (alias `H_XZ`), `H_XY`, `H_YZ`
//! - **90° rotations**: `SQRT_X`, `SQRT_X_DAG`, `SQRT_Y`, `SQRT_Y_DAG`,
//!   `SQRT_Z` / `S`, `SQRT_Z_DAG` / `S_DAG`
//! - **Two-qubit**: `CNOT`, `CZ`, `SWAP`
//!
//! # Example
//!
//! ```
//! use densim_gates::GateCatalog;
//!
//! let catalog = GateCatalog::standard();
//! let cnot = catalog.lookup("CNOT").unwrap();
//! assert_eq!(cnot.dimension(), 4);
//! assert!(cnot.is_unitary(1e-12));
//! ```

pub mod catalog;
pub mod error;
pub mod matrices;
pub mod matrix;

pub use catalog::{GateCatalog, GateCatalogBuilder};
pub use error::{GateError, Result};
pub use matrix::GateMatrix;
