//! Error types for state vector operations

use densim_gates::GateError;
use thiserror::Error;

/// Errors that can occur while building or evolving a state vector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Gate name not present in the engine's catalog
    #[error("Unknown gate '{name}'")]
    UnknownGate { name: String },

    /// Matrix or qubit targets do not fit the state
    #[error("Invalid gate application: {0}")]
    InvalidGateApplication(#[from] ApplicationError),

    /// Requested register is larger than the configured limit
    #[error("Qubit limit exceeded: requested {requested}, maximum {maximum}")]
    QubitLimitExceeded { requested: usize, maximum: usize },

    /// State vector could not be allocated
    #[error("Failed to allocate {size} bytes for state vector")]
    AllocationError { size: usize },

    /// Engine configuration rejected by validation
    #[error("Invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Reason a gate or Pauli application was rejected
///
/// Every variant is detected before any amplitude is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Matrix dimension is not `2^k` for `k` target qubits
    #[error("matrix dimension {actual} does not match {expected} for the given qubits")]
    MatrixDimension { expected: usize, actual: usize },

    /// Target qubit outside the register
    #[error("qubit {qubit} out of range for {num_qubits}-qubit state")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Same qubit listed twice
    #[error("qubit {qubit} targeted more than once")]
    DuplicateQubit { qubit: usize },

    /// Raw rows could not form a square power-of-two matrix
    #[error("malformed matrix: {reason}")]
    MalformedMatrix { reason: String },

    /// Pauli string does not fit at the requested offset
    #[error("Pauli string of length {len} at offset {offset} exceeds {num_qubits}-qubit state")]
    PauliOutOfRange {
        offset: usize,
        len: usize,
        num_qubits: usize,
    },
}

impl From<GateError> for StateError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::UnknownGate { name } => StateError::UnknownGate { name },
            GateError::InvalidMatrix { reason } => {
                StateError::InvalidGateApplication(ApplicationError::MalformedMatrix { reason })
            },
        }
    }
}

/// Errors from parsing the text form of a Pauli string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PauliParseError {
    #[error("invalid Pauli character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;
