//! Engine configuration

use serde::{Deserialize, Serialize};

/// Largest register for which `1 << num_qubits` fits in a `usize` index
/// with room for the fiber masks.
pub const MAX_SUPPORTED_QUBITS: usize = (usize::BITS - 2) as usize;

/// Configuration for a [`VectorEngine`](crate::VectorEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Process independent fibers on the rayon thread pool
    ///
    /// Default: true
    pub parallel: bool,

    /// Minimum number of qubits before the parallel path is used
    ///
    /// Smaller registers run single-threaded to avoid scheduling overhead.
    ///
    /// Default: 14
    pub parallel_threshold: usize,

    /// Largest register the engine will allocate
    ///
    /// Default: 30 (16 GiB of `Complex64` amplitudes)
    pub max_qubits: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 14,
            max_qubits: 30,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-threaded execution regardless of register size
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Parallel execution for every register size
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 0,
            ..Default::default()
        }
    }

    /// Enable or disable the parallel fiber loop
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set the minimum qubit count for parallel execution
    pub fn with_parallel_threshold(mut self, qubits: usize) -> Self {
        self.parallel_threshold = qubits;
        self
    }

    /// Set the largest register the engine will allocate
    pub fn with_max_qubits(mut self, qubits: usize) -> Self {
        self.max_qubits = qubits;
        self
    }

    /// Whether a register of `num_qubits` takes the parallel path
    #[inline]
    pub fn runs_parallel(&self, num_qubits: usize) -> bool {
        self.parallel && num_qubits >= self.parallel_threshold
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_qubits > MAX_SUPPORTED_QUBITS {
            return Err(format!(
                "max_qubits must be at most {}, got {}",
                MAX_SUPPORTED_QUBITS, self.max_qubits
            ));
        }

        Ok(())
    }
}
