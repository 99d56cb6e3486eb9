//! Error types for gate catalog lookups and matrix construction

use thiserror::Error;

/// Errors produced by the gate catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The requested name is not present in the catalog
    #[error("Unknown gate '{name}'")]
    UnknownGate { name: String },

    /// Matrix data is not a square 2^k × 2^k array
    #[error("Invalid gate matrix: {reason}")]
    InvalidMatrix { reason: String },
}

/// Result type for gate catalog operations
pub type Result<T> = std::result::Result<T, GateError>;
