//! Error types for the validating wrappers in [`crate::checked`].
//!
//! The networks themselves never fail; these errors only describe
//! inputs rejected before a network is invoked.

use thiserror::Error;

/// Errors reported by shape and precondition validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Buffer length is not a whole number of vectors.
    #[error("length {len} is not a multiple of the lane width {lanes}")]
    NotLaneMultiple { len: usize, lanes: usize },

    /// Buffer length does not match what the operation requires.
    #[error("expected length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Block network called with a vector count that is not a power of two.
    #[error("vector count {count} is not a power of two >= 2")]
    NotPowerOfTwo { count: usize },

    /// Merge input is not ascending.
    #[error("input is not ascending at index {index}")]
    NotAscending { index: usize },
}

/// Result type for validated operations.
pub type Result<T> = std::result::Result<T, SortError>;
