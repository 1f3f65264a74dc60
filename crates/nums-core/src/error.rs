//! Error Types - Nums Core Error Handling
//!
//! Provides the error taxonomy for every fallible array operation: construction,
//! indexed access and the range generator.
//!
//! # Key Features
//! - Unified error type for all Nums operations
//! - Failure context (offending dimension, expected vs actual counts)
//! - Integration with `std::error::Error`
//!
//! @version 0.1.0
//! @author Nums Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for Nums operations.
///
/// Every variant is a terminal outcome of the call that produced it. An
/// operation that fails never leaves the array partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data length does not equal the product of the shape.
    #[error("Shape mismatch: shape {shape:?} requires {expected} elements, got {actual}")]
    ShapeMismatch {
        /// The requested shape.
        shape: Vec<usize>,
        /// Element count implied by the shape.
        expected: usize,
        /// Length of the data that was supplied.
        actual: usize,
    },

    /// Element count or a stride of the shape does not fit in `isize`.
    #[error("Shape overflow: shape {shape:?} has more elements than can be addressed")]
    ShapeOverflow {
        /// The requested shape.
        shape: Vec<usize>,
    },

    /// The element buffer could not be allocated.
    #[error("Allocation failed: could not reserve {elements} elements")]
    AllocationFailed {
        /// Number of `f64` elements requested.
        elements: usize,
    },

    /// Wrong number of indices for the array rank.
    #[error("Index count mismatch: expected {expected} indices, got {actual}")]
    IndexCountMismatch {
        /// The array rank.
        expected: usize,
        /// Number of indices supplied.
        actual: usize,
    },

    /// Index is negative or past the end of its dimension.
    #[error("Index out of range at position {position}: index {index} for dimension of size {size}")]
    IndexOutOfRange {
        /// Dimension position of the offending index.
        position: usize,
        /// The offending index.
        index: isize,
        /// Size of that dimension.
        size: usize,
    },

    /// The range generator was called with an unsupported argument count.
    #[error("Invalid arguments: arange accepts 1, 2, or 3 arguments, got {count}")]
    InvalidArguments {
        /// Number of arguments supplied.
        count: usize,
    },

    /// One or more range generator arguments are not integers.
    #[error("Invalid argument type: arguments at positions {positions:?} must be integers, got {values:?}")]
    InvalidArgumentType {
        /// Zero-based positions of the non-integer arguments.
        positions: Vec<usize>,
        /// The raw values at those positions.
        values: Vec<String>,
    },

    /// The range generator was called with `start > stop`.
    #[error("Invalid range: start {start} cannot be greater than stop {stop}")]
    InvalidRange {
        /// Requested start.
        start: i64,
        /// Requested stop.
        stop: i64,
    },

    /// The range generator was called with a zero step.
    #[error("Invalid step: step cannot be 0")]
    InvalidStep,
}

// =============================================================================
// Error Kind
// =============================================================================

/// Fieldless discriminant of [`Error`], for matching on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::ShapeMismatch`].
    ShapeMismatch,
    /// See [`Error::ShapeOverflow`].
    ShapeOverflow,
    /// See [`Error::AllocationFailed`].
    AllocationFailed,
    /// See [`Error::IndexCountMismatch`].
    IndexCountMismatch,
    /// See [`Error::IndexOutOfRange`].
    IndexOutOfRange,
    /// See [`Error::InvalidArguments`].
    InvalidArguments,
    /// See [`Error::InvalidArgumentType`].
    InvalidArgumentType,
    /// See [`Error::InvalidRange`].
    InvalidRange,
    /// See [`Error::InvalidStep`].
    InvalidStep,
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for Nums operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Helper Functions
// =============================================================================

impl Error {
    /// Creates a new shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(shape: &[usize], expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            shape: shape.to_vec(),
            expected,
            actual,
        }
    }

    /// Creates a new shape overflow error.
    #[must_use]
    pub fn shape_overflow(shape: &[usize]) -> Self {
        Self::ShapeOverflow {
            shape: shape.to_vec(),
        }
    }

    /// Creates a new index out of range error.
    #[must_use]
    pub fn index_out_of_range(position: usize, index: isize, size: usize) -> Self {
        Self::IndexOutOfRange {
            position,
            index,
            size,
        }
    }

    /// Returns the failure class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Self::ShapeOverflow { .. } => ErrorKind::ShapeOverflow,
            Self::AllocationFailed { .. } => ErrorKind::AllocationFailed,
            Self::IndexCountMismatch { .. } => ErrorKind::IndexCountMismatch,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidArguments { .. } => ErrorKind::InvalidArguments,
            Self::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            Self::InvalidRange { .. } => ErrorKind::InvalidRange,
            Self::InvalidStep => ErrorKind::InvalidStep,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
