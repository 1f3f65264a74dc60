//! NdArray - Core N-Dimensional Array Type
//!
//! The `NdArray` struct owns a flat buffer of `f64` values together with a
//! shape and a row-major stride table derived from it. Shape and strides are
//! fixed at construction; only element values change afterwards, through
//! [`NdArray::set`].
//!
//! # Key Features
//! - Construction validates `data.len() == product(shape)`
//! - Bounds-checked multi-index access and in-place mutation
//! - Read-only metadata views (shape, strides, flat data)
//! - Nested bracket pretty-printer
//!
//! @version 0.1.0
//! @author Nums Development Team

use core::fmt;

use nums_core::error::{Error, Result};

use crate::shape::{flat_index, layout, unravel_index, Shape, Strides};

// =============================================================================
// NdArray Struct
// =============================================================================

/// A fixed-rank, row-major N-dimensional array of `f64` values.
///
/// The array exclusively owns its buffer. There are no views, so every
/// `NdArray` is contiguous and `strides` is always the row-major layout of `shape`.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawArray", into = "RawArray")
)]
pub struct NdArray {
    /// Flat element buffer, `data.len() == numel(shape)`.
    data: Vec<f64>,
    /// Shape of the array (dimensions).
    shape: Shape,
    /// Strides for each dimension.
    strides: Strides,
}

impl NdArray {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a new array wrapping `data` with the given shape.
    ///
    /// # Arguments
    /// * `data` - Flat values in row-major order
    /// * `shape` - Extent of each dimension
    ///
    /// # Returns
    /// New array, `ShapeOverflow` if the product of `shape` does not fit in
    /// `isize`, or `ShapeMismatch` if `data.len()` is not that product.
    pub fn from_vec(data: Vec<f64>, shape: &[usize]) -> Result<Self> {
        let (expected, strides) = layout(shape)?;
        if data.len() != expected {
            return Err(Error::shape_mismatch(shape, expected, data.len()));
        }

        Ok(Self::from_parts(data, shape, strides))
    }

    /// Creates a new array by calling `f` with each flat offset in row-major order.
    ///
    /// The buffer is reserved up front, so an oversized shape yields
    /// `ShapeOverflow` or `AllocationFailed` instead of aborting.
    pub fn from_fn<F>(shape: &[usize], f: F) -> Result<Self>
    where
        F: FnMut(usize) -> f64,
    {
        let (numel, strides) = layout(shape)?;

        let mut data = Vec::new();
        data.try_reserve_exact(numel)
            .map_err(|_| Error::AllocationFailed { elements: numel })?;
        data.extend((0..numel).map(f));

        Ok(Self::from_parts(data, shape, strides))
    }

    /// Creates a new array by copying `data` with the given shape.
    pub fn from_slice(data: &[f64], shape: &[usize]) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Creates a scalar array (rank 0, one element).
    pub fn scalar(value: f64) -> Self {
        Self::from_parts(vec![value], &[], Strides::new())
    }

    /// Assembles an array from a buffer and the `layout` of `shape`.
    fn from_parts(data: Vec<f64>, shape: &[usize], strides: Strides) -> Self {
        debug_assert_eq!(strides.len(), shape.len());
        debug_assert_eq!(Ok(data.len()), crate::shape::numel(shape));

        let shape = Shape::from_slice(shape);
        tracing::trace!(shape = ?shape.as_slice(), strides = ?strides.as_slice(), "created array");

        Self {
            data,
            shape,
            strides,
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the shape of the array.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the strides of the array.
    #[must_use]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the array has zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if this array is a scalar (0-dimensional).
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    // =========================================================================
    // Data Access
    // =========================================================================

    /// Returns the flat buffer offset of the element at `indices`.
    pub fn offset_of(&self, indices: &[isize]) -> Result<usize> {
        flat_index(indices, &self.shape, &self.strides)
    }

    /// Returns the element at the given indices.
    ///
    /// # Arguments
    /// * `indices` - Exactly one index per dimension
    pub fn at(&self, indices: &[isize]) -> Result<f64> {
        let offset = self.offset_of(indices)?;
        Ok(self.data[offset])
    }

    /// Sets the element at the given indices.
    ///
    /// The array is left untouched when the indices are rejected.
    ///
    /// # Arguments
    /// * `value` - Value to store
    /// * `indices` - Exactly one index per dimension
    pub fn set(&mut self, value: f64, indices: &[isize]) -> Result<()> {
        let offset = self.offset_of(indices)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Returns the flat buffer in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the array and returns its flat buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterates over every valid index tuple in row-major order.
    pub fn indices(&self) -> impl Iterator<Item = Vec<isize>> + '_ {
        (0..self.size()).map(move |offset| unravel_index(offset, &self.shape))
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Renders the array as nested brackets mirroring its shape.
    ///
    /// Every element is printed with four decimal digits and a trailing comma;
    /// siblings are separated by a single space.
    #[must_use]
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }

    fn render_dim<W: fmt::Write>(
        &self,
        out: &mut W,
        dim: usize,
        prefix: &mut [isize],
    ) -> fmt::Result {
        if dim == self.ndim() {
            let value = self.at(prefix).map_err(|_| fmt::Error)?;
            return write!(out, "{value:.4},");
        }

        out.write_char('[')?;
        for i in 0..self.shape[dim] {
            if i > 0 {
                out.write_char(' ')?;
            }
            prefix[dim] = i as isize;
            self.render_dim(out, dim + 1, prefix)?;
        }
        out.write_char(']')
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One slot per dimension, overwritten positionally as the recursion descends.
        let mut prefix = Strides::from_elem(0, self.ndim());
        self.render_dim(f, 0, &mut prefix)
    }
}

impl fmt::Debug for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NdArray(shape={:?}, strides={:?}",
            self.shape(),
            self.strides()
        )?;
        if self.size() <= 10 {
            write!(f, ", data={:?}", self.data)?;
        }
        write!(f, ")")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Wire form of an array: strides are derived, so only shape and data travel.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawArray> for NdArray {
    type Error = Error;

    fn try_from(raw: RawArray) -> Result<Self> {
        Self::from_vec(raw.data, &raw.shape)
    }
}

#[cfg(feature = "serde")]
impl From<NdArray> for RawArray {
    fn from(array: NdArray) -> Self {
        Self {
            shape: array.shape.to_vec(),
            data: array.data,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
