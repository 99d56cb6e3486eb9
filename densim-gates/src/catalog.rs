//! Immutable name → unitary catalog
//!
//! The standard catalog is built once per process and shared through an
//! `Arc`; engines hold a reference to the catalog they were created with.
//! There is no way to mutate a catalog after it has been built. Callers that
//! need extra gates assemble a new catalog with [`GateCatalogBuilder`].
//!
//! # Example
//!
//! ```rust
//! use densim_gates::GateCatalog;
//!
//! let catalog = GateCatalog::shared();
//! let h = catalog.lookup("H").unwrap();
//! assert_eq!(h.num_qubits(), 1);
//! assert!(catalog.lookup("Q").is_err());
//! ```

use crate::error::{GateError, Result};
use crate::matrices;
use crate::matrix::GateMatrix;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static STANDARD: OnceLock<Arc<GateCatalog>> = OnceLock::new();

/// Fixed mapping from gate name to unitary
#[derive(Debug, Clone)]
pub struct GateCatalog {
    gates: HashMap<String, GateMatrix>,
}

impl GateCatalog {
    /// Build the standard catalog
    ///
    /// Contains `I`, `X`, `Y`, `Z`, `H`, `H_XY`, `H_XZ`, `H_YZ`, `SQRT_X`,
    /// `SQRT_X_DAG`, `SQRT_Y`, `SQRT_Y_DAG`, `SQRT_Z`, `SQRT_Z_DAG`, `S`,
    /// `S_DAG`, `CNOT`, `CZ` and `SWAP`.
    pub fn standard() -> Self {
        GateCatalogBuilder::standard().build()
    }

    /// Process-wide standard catalog, built on first use
    pub fn shared() -> Arc<GateCatalog> {
        Arc::clone(STANDARD.get_or_init(|| Arc::new(Self::standard())))
    }

    /// Start an empty catalog
    pub fn builder() -> GateCatalogBuilder {
        GateCatalogBuilder::new()
    }

    /// Look up a gate by its exact name
    ///
    /// # Errors
    /// Returns [`GateError::UnknownGate`] if the name is not cataloged.
    pub fn lookup(&self, name: &str) -> Result<&GateMatrix> {
        self.gates.get(name).ok_or_else(|| GateError::UnknownGate {
            name: name.to_string(),
        })
    }

    /// Check whether a name is cataloged
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains_key(name)
    }

    /// All gate names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names of the gates acting on exactly `num_qubits` qubits, sorted
    pub fn names_for_qubits(&self, num_qubits: usize) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .gates
            .iter()
            .filter(|(_, matrix)| matrix.num_qubits() == num_qubits)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Number of cataloged names, aliases included
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl Default for GateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Accumulates entries before freezing them into a [`GateCatalog`]
///
/// ```rust
/// use densim_gates::{GateCatalogBuilder, GateMatrix};
///
/// let catalog = GateCatalogBuilder::standard()
///     .insert("ID2", GateMatrix::identity(2))
///     .build();
/// assert!(catalog.contains("ID2"));
/// assert!(catalog.contains("CNOT"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GateCatalogBuilder {
    gates: HashMap<String, GateMatrix>,
}

impl GateCatalogBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with the standard entries
    pub fn standard() -> Self {
        let single = [
            ("I", &matrices::IDENTITY),
            ("X", &matrices::PAULI_X),
            ("Y", &matrices::PAULI_Y),
            ("Z", &matrices::PAULI_Z),
            ("H", &matrices::HADAMARD),
            ("H_XY", &matrices::H_XY),
            ("H_XZ", &matrices::HADAMARD),
            ("H_YZ", &matrices::H_YZ),
            ("SQRT_X", &matrices::SQRT_X),
            ("SQRT_X_DAG", &matrices::SQRT_X_DAG),
            ("SQRT_Y", &matrices::SQRT_Y),
            ("SQRT_Y_DAG", &matrices::SQRT_Y_DAG),
            ("SQRT_Z", &matrices::S_GATE),
            ("SQRT_Z_DAG", &matrices::S_GATE_DAGGER),
            ("S", &matrices::S_GATE),
            ("S_DAG", &matrices::S_GATE_DAGGER),
        ];
        let double = [
            ("CNOT", &matrices::CNOT),
            ("CZ", &matrices::CZ),
            ("SWAP", &matrices::SWAP),
        ];

        let mut gates = HashMap::with_capacity(single.len() + double.len());
        for (name, table) in single {
            gates.insert(name.to_string(), GateMatrix::from_table(table));
        }
        for (name, table) in double {
            gates.insert(name.to_string(), GateMatrix::from_table(table));
        }

        Self { gates }
    }

    /// Add or replace an entry
    pub fn insert(mut self, name: impl Into<String>, matrix: GateMatrix) -> Self {
        self.gates.insert(name.into(), matrix);
        self
    }

    /// Freeze into an immutable catalog
    pub fn build(self) -> GateCatalog {
        GateCatalog { gates: self.gates }
    }
}
