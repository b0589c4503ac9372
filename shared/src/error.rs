//! Error types for the shared crate
//!
//! The marketplace API contract guarantees the required order fields, so a
//! snapshot that fails to deserialize is a caller contract violation and is
//! surfaced as [`OrderError::Malformed`]. Optional fields and lookup misses
//! are never errors; they resolve to documented defaults.

use thiserror::Error;

/// Result alias for snapshot parsing and validation
pub type OrderResult<T> = Result<T, OrderError>;

/// Unified error type for order snapshot handling
#[derive(Debug, Error)]
pub enum OrderError {
    /// The snapshot violates the marketplace API contract: a required field
    /// is missing, a state carries an unknown value, or a field has the
    /// wrong type.
    #[error("malformed order snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A monetary field carries NaN or infinity
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteAmount {
        /// Dotted path of the offending field
        field: String,
        /// The non-finite value as received
        value: f64,
    },
}
