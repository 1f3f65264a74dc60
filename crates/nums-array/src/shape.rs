//! Shape and Strides - Array Dimension Management
//!
//! Provides types and functions for managing array shapes and strides. Shapes
//! define the extent of each dimension, while strides define how far to move
//! in the flat buffer to advance one step along a dimension.
//!
//! # Key Features
//! - Small-vector shape representation (no heap allocation up to 6 dimensions)
//! - Row-major (C-order) stride computation
//! - Validated index-to-offset mapping and its inverse
//!
//! @version 0.1.0
//! @author Nums Development Team

use smallvec::SmallVec;

use nums_core::error::{Error, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Shape type - dimensions of an array.
/// Uses `SmallVec` for stack allocation of small shapes (up to 6 dimensions).
pub type Shape = SmallVec<[usize; 6]>;

/// Strides type - step sizes for each dimension.
pub type Strides = SmallVec<[isize; 6]>;

// =============================================================================
// Shape Utilities
// =============================================================================

/// Computes the element count and row-major (C-order) strides of a shape.
///
/// `strides[rank - 1] == 1` and `strides[i] == strides[i + 1] * shape[i + 1]`.
/// The element count is the product of all dimensions, 1 for the empty shape.
///
/// # Returns
/// `(numel, strides)`, or `ShapeOverflow` if the element count or any stride
/// does not fit in `isize`. A shape containing a zero dimension still fails
/// when the strides of the outer dimensions overflow.
pub fn layout(shape: &[usize]) -> Result<(usize, Strides)> {
    let overflow = || Error::shape_overflow(shape);
    let mut strides = Strides::with_capacity(shape.len());
    let mut stride = 1isize;

    // Compute strides from right to left
    for &dim in shape.iter().rev() {
        strides.push(stride);
        let dim = isize::try_from(dim).map_err(|_| overflow())?;
        stride = stride.checked_mul(dim).ok_or_else(overflow)?;
    }

    strides.reverse();
    // Products of non-negative factors never go negative.
    Ok((stride as usize, strides))
}

/// Computes the total number of elements from a shape.
///
/// The empty shape describes a scalar and holds exactly one element.
pub fn numel(shape: &[usize]) -> Result<usize> {
    layout(shape).map(|(numel, _)| numel)
}

/// Computes row-major (C-order) strides for a shape.
pub fn contiguous_strides(shape: &[usize]) -> Result<Strides> {
    layout(shape).map(|(_, strides)| strides)
}

// =============================================================================
// Indexing
// =============================================================================

/// Validates `indices` against `shape` and returns the flat offset.
///
/// # Arguments
/// * `indices` - One index per dimension, in dimension order
/// * `shape` - Array shape
/// * `strides` - Array strides (same length as `shape`)
///
/// # Returns
/// `Σ indices[i] * strides[i]`, or `IndexCountMismatch` when the number of
/// indices differs from the rank, or `IndexOutOfRange` naming the first
/// dimension whose index is negative or not below its size.
pub fn flat_index(indices: &[isize], shape: &[usize], strides: &[isize]) -> Result<usize> {
    debug_assert_eq!(shape.len(), strides.len());

    if indices.len() != shape.len() {
        return Err(Error::IndexCountMismatch {
            expected: shape.len(),
            actual: indices.len(),
        });
    }

    let mut offset = 0isize;
    for (position, ((&idx, &dim), &stride)) in
        indices.iter().zip(shape.iter()).zip(strides.iter()).enumerate()
    {
        if idx < 0 || idx as usize >= dim {
            return Err(Error::index_out_of_range(position, idx, dim));
        }
        offset += idx * stride;
    }

    Ok(offset as usize)
}

/// Converts a flat offset into multi-dimensional indices (row-major).
///
/// The indices are returned in the signed form accepted by [`flat_index`].
///
/// # Panics
/// Panics if `shape` contains a zero dimension. Such a shape has no valid
/// offset, so callers iterate `0..numel(shape)` and never reach this.
pub(crate) fn unravel_index(mut offset: usize, shape: &[usize]) -> Vec<isize> {
    debug_assert!(shape.iter().all(|&dim| dim > 0));
    let mut indices = vec![0isize; shape.len()];

    for (i, &dim) in shape.iter().enumerate().rev() {
        indices[i] = (offset % dim) as isize;
        offset /= dim;
    }

    indices
}

// =============================================================================
// Tests
// =============================================================================
