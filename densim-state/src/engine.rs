//! Dense state-vector engine
//!
//! `VectorEngine` owns the `2^N` amplitudes of an N-qubit register and evolves
//! them in place under gate unitaries and Pauli strings. Basis index bit `q`
//! holds the value of qubit `q`.
//!
//! Every apply call validates its inputs before touching the amplitudes, so a
//! rejected call leaves the state exactly as it was.

use crate::config::{EngineConfig, MAX_SUPPORTED_QUBITS};
use crate::error::{ApplicationError, Result, StateError};
use crate::kernel;
use crate::pauli::PauliString;
use densim_gates::{GateCatalog, GateMatrix};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Tolerance used by [`VectorEngine::approximate_equals`]
pub const APPROX_TOLERANCE: f64 = 1e-6;

/// Dense state-vector simulator
///
/// # Example
///
/// ```
/// use densim_state::VectorEngine;
/// use num_complex::Complex64;
///
/// let mut engine = VectorEngine::new(2).unwrap();
/// engine.apply_gate("X", 0).unwrap();
/// engine.apply_gate2("CNOT", 0, 1).unwrap();
///
/// // |q1=1, q0=1⟩
/// assert_eq!(engine.amplitudes()[0b11], Complex64::new(1.0, 0.0));
/// ```
#[derive(Clone)]
pub struct VectorEngine {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
    catalog: Arc<GateCatalog>,
    config: EngineConfig,
}

impl VectorEngine {
    /// Create an engine in |0...0⟩ with the default configuration and the
    /// shared standard catalog
    ///
    /// # Errors
    /// Returns [`StateError::QubitLimitExceeded`] if `num_qubits` exceeds the
    /// default limit, or [`StateError::AllocationError`] if the vector cannot
    /// be allocated.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Self::with_config(num_qubits, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(num_qubits: usize, config: EngineConfig) -> Result<Self> {
        Self::with_catalog(num_qubits, GateCatalog::shared(), config)
    }

    /// Create an engine that resolves gate names against `catalog`
    pub fn with_catalog(
        num_qubits: usize,
        catalog: Arc<GateCatalog>,
        config: EngineConfig,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| StateError::InvalidConfig { reason })?;

        let maximum = config.max_qubits.min(MAX_SUPPORTED_QUBITS);
        if num_qubits > maximum {
            return Err(StateError::QubitLimitExceeded {
                requested: num_qubits,
                maximum,
            });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = Vec::new();
        amplitudes
            .try_reserve_exact(dimension)
            .map_err(|_| StateError::AllocationError {
                size: dimension.saturating_mul(std::mem::size_of::<Complex64>()),
            })?;
        amplitudes.resize(dimension, Complex64::new(0.0, 0.0));
        amplitudes[0] = Complex64::new(1.0, 0.0);

        debug!(
            num_qubits,
            dimension,
            parallel = config.runs_parallel(num_qubits),
            "allocated state vector"
        );

        Ok(Self {
            amplitudes,
            num_qubits,
            catalog,
            config,
        })
    }

    /// Number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Current amplitudes, indexed by basis state
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Consume the engine and return its amplitudes
    pub fn into_amplitudes(self) -> Vec<Complex64> {
        self.amplitudes
    }

    /// Catalog used for named gates
    pub fn catalog(&self) -> &Arc<GateCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Apply a `2^k × 2^k` unitary to `k` qubit positions
    ///
    /// Row/column bit `j` of `matrix` corresponds to `qubits[j]`. For example
    /// `CNOT` applied to `[control, target]` treats index bit 0 as the control.
    ///
    /// # Errors
    /// Returns [`StateError::InvalidGateApplication`] if a position is out of
    /// range, repeated, or the matrix dimension is not `2^qubits.len()`.
    /// The state is unchanged on error.
    pub fn apply(&mut self, matrix: &GateMatrix, qubits: &[usize]) -> Result<()> {
        if let Err(err) = self.check_targets(matrix, qubits) {
            debug!(?qubits, error = %err, "rejected gate application");
            return Err(err.into());
        }

        let masks = kernel::fiber_masks(qubits);
        if self.runs_parallel() {
            trace!(
                k = qubits.len(),
                ?qubits,
                chunk_len = kernel::fiber_chunk_len(&masks),
                "applying gate in parallel"
            );
            kernel::apply_fibers_parallel(&mut self.amplitudes, matrix, &masks);
        } else {
            trace!(k = qubits.len(), ?qubits, "applying gate");
            kernel::apply_fibers_sequential(&mut self.amplitudes, matrix, &masks);
        }

        Ok(())
    }

    /// Apply a unitary given as raw rows
    ///
    /// # Errors
    /// Returns [`StateError::InvalidGateApplication`] if the rows are ragged
    /// or not a power-of-two square, plus every error of [`apply`](Self::apply).
    pub fn apply_rows<R: AsRef<[Complex64]>>(
        &mut self,
        rows: &[R],
        qubits: &[usize],
    ) -> Result<()> {
        let matrix = GateMatrix::from_rows(rows)?;
        self.apply(&matrix, qubits)
    }

    /// Apply a named gate from the catalog to the listed qubits
    ///
    /// # Errors
    /// Returns [`StateError::UnknownGate`] if the name is not cataloged, plus
    /// every error of [`apply`](Self::apply).
    pub fn apply_named(&mut self, name: &str, qubits: &[usize]) -> Result<()> {
        let catalog = Arc::clone(&self.catalog);
        let matrix = catalog.lookup(name).map_err(|err| {
            debug!(gate = name, "unknown gate");
            StateError::from(err)
        })?;
        self.apply(matrix, qubits)
    }

    /// Apply a named single-qubit gate
    pub fn apply_gate(&mut self, name: &str, qubit: usize) -> Result<()> {
        self.apply_named(name, &[qubit])
    }

    /// Apply a named two-qubit gate; `qubit1` maps to index bit 0
    pub fn apply_gate2(&mut self, name: &str, qubit1: usize, qubit2: usize) -> Result<()> {
        self.apply_named(name, &[qubit1, qubit2])
    }

    /// Apply a signed Pauli string starting at qubit `offset`
    ///
    /// A negative sign flips every amplitude first. Each position `k` then
    /// acts on qubit `offset + k` with the catalog gate chosen from its bits:
    ///
    /// | X bit | Z bit | gate applied |
    /// |-------|-------|--------------|
    /// | 1     | 1     | `Z`          |
    /// | 1     | 0     | `X`          |
    /// | 0     | 1     | `Y`          |
    /// | 0     | 0     | none         |
    ///
    /// # Errors
    /// Returns [`StateError::InvalidGateApplication`] if the string does not
    /// fit inside the register at `offset`. Identity positions count toward
    /// the length, so trailing `_` past the last qubit is rejected too.
    /// Returns [`StateError::UnknownGate`] if the engine's catalog lacks one
    /// of the gates above. The state is unchanged on error.
    pub fn apply_pauli(&mut self, pauli: &PauliString, offset: usize) -> Result<()> {
        let fits = offset
            .checked_add(pauli.len())
            .map_or(false, |end| end <= self.num_qubits);
        if !fits {
            let err = ApplicationError::PauliOutOfRange {
                offset,
                len: pauli.len(),
                num_qubits: self.num_qubits,
            };
            debug!(%pauli, error = %err, "rejected Pauli string");
            return Err(err.into());
        }

        let catalog = Arc::clone(&self.catalog);
        let mut factors: SmallVec<[(usize, &GateMatrix); 8]> = SmallVec::new();
        for k in 0..pauli.len() {
            if let Some(name) = factor_gate(pauli.x_bit(k), pauli.z_bit(k)) {
                factors.push((offset + k, catalog.lookup(name)?));
            }
        }

        trace!(%pauli, offset, factors = factors.len(), "applying Pauli string");

        if pauli.is_negative() {
            let parallel = self.runs_parallel();
            kernel::negate(&mut self.amplitudes, parallel);
        }
        for (qubit, matrix) in factors {
            self.apply(matrix, &[qubit])?;
        }

        Ok(())
    }

    /// Compare two states amplitude by amplitude within [`APPROX_TOLERANCE`]
    ///
    /// With `up_to_global_phase`, `other` is first rotated by the phase that
    /// aligns its largest-magnitude amplitude with the corresponding one here.
    pub fn approximate_equals(&self, other: &VectorEngine, up_to_global_phase: bool) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        let mut phase = Complex64::new(1.0, 0.0);
        if up_to_global_phase {
            let pivot = self
                .amplitudes
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.norm_sqr().total_cmp(&b.norm_sqr()))
                .map(|(index, _)| index)
                .unwrap_or(0);
            let ours = self.amplitudes[pivot];
            let theirs = other.amplitudes[pivot];
            if ours.norm() > APPROX_TOLERANCE && theirs.norm() > APPROX_TOLERANCE {
                let ratio = ours / theirs;
                phase = ratio / ratio.norm();
            }
        }

        self.amplitudes
            .iter()
            .zip(&other.amplitudes)
            .all(|(a, b)| (a - b * phase).norm() <= APPROX_TOLERANCE)
    }

    #[inline]
    fn runs_parallel(&self) -> bool {
        self.config.runs_parallel(self.num_qubits)
    }

    fn check_targets(
        &self,
        matrix: &GateMatrix,
        qubits: &[usize],
    ) -> std::result::Result<(), ApplicationError> {
        let mut seen = 0usize;
        for &qubit in qubits {
            if qubit >= self.num_qubits {
                return Err(ApplicationError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
            if seen & (1 << qubit) != 0 {
                return Err(ApplicationError::DuplicateQubit { qubit });
            }
            seen |= 1 << qubit;
        }

        // distinct in-range targets imply qubits.len() <= num_qubits
        let expected = 1usize << qubits.len();
        if matrix.dimension() != expected {
            return Err(ApplicationError::MatrixDimension {
                expected,
                actual: matrix.dimension(),
            });
        }

        Ok(())
    }
}

/// Catalog gate applied for one Pauli-string position
///
/// X∧Z selects `Z` and a lone Z bit selects `Y`. This mirrors the established
/// behavior of the simulator and is kept as-is; see DESIGN.md.
#[inline]
fn factor_gate(x: bool, z: bool) -> Option<&'static str> {
    match (x, z) {
        (true, true) => Some("Z"),
        (true, false) => Some("X"),
        (false, true) => Some("Y"),
        (false, false) => None,
    }
}

impl fmt::Debug for VectorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorEngine")
            .field("num_qubits", &self.num_qubits)
            .field("dimension", &self.dimension())
            .field("norm", &self.norm())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use densim_gates::GateCatalogBuilder;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_initial_state() {
        for n in 0..6 {
            let engine = VectorEngine::new(n).unwrap();
            assert_eq!(engine.dimension(), 1 << n);
            assert_eq!(engine.amplitudes()[0], c(1.0, 0.0));
            assert!(engine.amplitudes()[1..].iter().all(|a| *a == c(0.0, 0.0)));
        }
    }

    #[test]
    fn test_qubit_limit() {
        let config = EngineConfig::default().with_max_qubits(4);
        let err = VectorEngine::with_config(5, config).unwrap_err();
        assert_eq!(
            err,
            StateError::QubitLimitExceeded {
                requested: 5,
                maximum: 4
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig::default().with_max_qubits(usize::MAX);
        assert!(matches!(
            VectorEngine::with_config(1, config),
            Err(StateError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_dimension_mismatch_leaves_state() {
        let mut engine = VectorEngine::new(3).unwrap();
        engine.apply_gate("H", 0).unwrap();
        let before = engine.amplitudes().to_vec();

        let err = engine.apply(&GateMatrix::identity(2), &[1]).unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidGateApplication(ApplicationError::MatrixDimension {
                expected: 2,
                actual: 4
            })
        );
        assert_eq!(engine.amplitudes(), before.as_slice());
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        let mut engine = VectorEngine::new(3).unwrap();
        let err = engine.apply_gate2("CNOT", 1, 1).unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidGateApplication(ApplicationError::DuplicateQubit { qubit: 1 })
        );
    }

    #[test]
    fn test_apply_rows_ragged() {
        let mut engine = VectorEngine::new(1).unwrap();
        let rows = vec![vec![c(1.0, 0.0)], vec![c(0.0, 0.0), c(1.0, 0.0)]];
        assert!(matches!(
            engine.apply_rows(&rows, &[0]),
            Err(StateError::InvalidGateApplication(ApplicationError::MalformedMatrix { .. }))
        ));
    }

    #[test]
    fn test_apply_rows_matches_named() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let rows = [[c(s, 0.0), c(s, 0.0)], [c(s, 0.0), c(-s, 0.0)]];

        let mut a = VectorEngine::new(2).unwrap();
        a.apply_rows(&rows, &[1]).unwrap();
        let mut b = VectorEngine::new(2).unwrap();
        b.apply_gate("H", 1).unwrap();

        assert!(a.approximate_equals(&b, false));
    }

    #[test]
    fn test_zero_qubit_matrix_is_global_scalar() {
        let mut engine = VectorEngine::new(2).unwrap();
        let phase = GateMatrix::from_rows(&[[c(0.0, 1.0)]]).unwrap();
        engine.apply(&phase, &[]).unwrap();
        assert_eq!(engine.amplitudes()[0], c(0.0, 1.0));
    }

    #[test]
    fn test_three_qubit_gate_ordering() {
        // Toffoli with controls on index bits 0 and 1, target on bit 2
        let mut rows = vec![vec![c(0.0, 0.0); 8]; 8];
        for i in 0..8 {
            let j = if i & 0b011 == 0b011 { i ^ 0b100 } else { i };
            rows[j][i] = c(1.0, 0.0);
        }

        let mut engine = VectorEngine::new(4).unwrap();
        engine.apply_gate("X", 3).unwrap();
        engine.apply_gate("X", 0).unwrap();
        // controls are qubits 3 and 0, target is qubit 2
        engine.apply_rows(&rows, &[3, 0, 2]).unwrap();

        assert_eq!(engine.amplitudes()[0b1101], c(1.0, 0.0));
        assert_relative_eq!(engine.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pauli_identity_is_noop() {
        let mut engine = VectorEngine::new(3).unwrap();
        engine.apply_gate("H", 2).unwrap();
        let before = engine.clone();
        engine.apply_pauli(&PauliString::identity(3), 0).unwrap();
        assert!(engine.approximate_equals(&before, false));
    }

    #[test]
    fn test_pauli_both_bits_apply_z() {
        let mut engine = VectorEngine::new(1).unwrap();
        engine.apply_gate("X", 0).unwrap();
        engine.apply_pauli(&"Y".parse().unwrap(), 0).unwrap();
        // Z on |1⟩ gives -|1⟩
        assert_eq!(engine.amplitudes()[1], c(-1.0, 0.0));
    }

    #[test]
    fn test_pauli_z_bit_alone_applies_y() {
        let mut engine = VectorEngine::new(1).unwrap();
        engine.apply_pauli(&"Z".parse().unwrap(), 0).unwrap();
        // Y on |0⟩ gives i|1⟩
        assert_eq!(engine.amplitudes()[0], c(0.0, 0.0));
        assert_eq!(engine.amplitudes()[1], c(0.0, 1.0));
    }

    #[test]
    fn test_pauli_out_of_range_leaves_state() {
        let mut engine = VectorEngine::new(2).unwrap();
        let pauli: PauliString = "-XX".parse().unwrap();
        let err = engine.apply_pauli(&pauli, 1).unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidGateApplication(ApplicationError::PauliOutOfRange {
                offset: 1,
                len: 2,
                num_qubits: 2
            })
        );
        assert_eq!(engine.amplitudes()[0], c(1.0, 0.0));
    }

    #[test]
    fn test_pauli_with_catalog_missing_gate() {
        let catalog = Arc::new(GateCatalog::builder().insert("X", GateMatrix::identity(1)).build());
        let mut engine = VectorEngine::with_catalog(1, catalog, EngineConfig::default()).unwrap();
        let err = engine.apply_pauli(&"-Z".parse().unwrap(), 0).unwrap_err();
        assert_eq!(err, StateError::UnknownGate { name: "Y".into() });
        // sign flip must not have happened
        assert_eq!(engine.amplitudes()[0], c(1.0, 0.0));
    }

    #[test]
    fn test_custom_catalog_entry() {
        let catalog = Arc::new(
            GateCatalogBuilder::standard()
                .insert("NOT", GateCatalog::standard().lookup("X").unwrap().clone())
                .build(),
        );
        let mut engine = VectorEngine::with_catalog(2, catalog, EngineConfig::default()).unwrap();
        engine.apply_gate("NOT", 1).unwrap();
        assert_eq!(engine.amplitudes()[0b10], c(1.0, 0.0));
    }

    #[test]
    fn test_approximate_equals_global_phase() {
        let mut a = VectorEngine::new(2).unwrap();
        a.apply_gate("H", 0).unwrap();
        let mut b = a.clone();
        b.apply_pauli(&PauliString::identity(2).with_sign(true), 0).unwrap();

        assert!(!a.approximate_equals(&b, false));
        assert!(a.approximate_equals(&b, true));

        let larger = VectorEngine::new(3).unwrap();
        assert!(!a.approximate_equals(&larger, true));
    }

    #[test]
    fn test_debug_omits_amplitudes() {
        let engine = VectorEngine::new(4).unwrap();
        let text = format!("{:?}", engine);
        assert!(text.contains("num_qubits: 4"));
        assert!(text.contains("dimension: 16"));
    }

    #[test]
    fn test_negative_pauli_on_parallel_engine() {
        let mut parallel = VectorEngine::with_config(4, EngineConfig::parallel()).unwrap();
        let mut sequential = VectorEngine::with_config(4, EngineConfig::sequential()).unwrap();
        let pauli: PauliString = "-XZ_Y".parse().unwrap();
        for engine in [&mut parallel, &mut sequential] {
            engine.apply_gate("H", 2).unwrap();
            engine.apply_pauli(&pauli, 0).unwrap();
        }
        assert_eq!(parallel.amplitudes(), sequential.amplitudes());
        assert_relative_eq!(parallel.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_qubit_engine_and_empty_pauli() {
        let mut engine = VectorEngine::new(0).unwrap();
        engine.apply_pauli(&PauliString::identity(0), 0).unwrap();
        engine
            .apply_pauli(&PauliString::identity(0).with_sign(true), 0)
            .unwrap();
        assert_eq!(engine.amplitudes(), &[c(-1.0, 0.0)]);

        let err = engine.apply_gate("X", 0).unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidGateApplication(ApplicationError::QubitOutOfRange {
                qubit: 0,
                num_qubits: 0
            })
        );
        assert_eq!(engine.amplitudes(), &[c(-1.0, 0.0)]);
    }

    #[test]
    fn test_pauli_trailing_identity_past_register_rejected() {
        let mut engine = VectorEngine::new(2).unwrap();
        let err = engine.apply_pauli(&"X__".parse().unwrap(), 0).unwrap_err();
        assert!(matches!(
            err,
            StateError::InvalidGateApplication(ApplicationError::PauliOutOfRange { len: 3, .. })
        ));
        assert_eq!(engine.amplitudes()[0], c(1.0, 0.0));
    }
}
