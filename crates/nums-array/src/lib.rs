//! Nums Array - Row-Major N-Dimensional Array
//!
//! This crate provides [`NdArray`], a fixed-rank dense array of `f64` values
//! stored in one contiguous buffer and addressed through a shape and a derived
//! row-major stride table.
//!
//! # Key Features
//! - Construction from explicit data, or filled with zeros, ones or a constant
//! - Integer range generator (`arange`) with 1, 2 or 3 arguments
//! - Bounds-checked multi-index reads and in-place writes
//! - Nested bracket pretty-printer
//!
//! # Example
//! ```rust
//! use nums_array::{arange, zeros, NdArray};
//!
//! let data: Vec<f64> = (1..=12).map(f64::from).collect();
//! let mut a = NdArray::from_vec(data, &[2, 3, 2]).unwrap();
//! assert_eq!(a.strides(), &[6, 2, 1]);
//!
//! assert_eq!(a.at(&[1, 2, 1]).unwrap(), 12.0);
//! a.set(100.0, &[1, 2, 1]).unwrap();
//! assert_eq!(a.at(&[1, 2, 1]).unwrap(), 100.0);
//!
//! let z = zeros(&[2, 2]);
//! assert_eq!(z.pretty_print(), "[[0.0000, 0.0000,] [0.0000, 0.0000,]]");
//!
//! let r = arange((0, 10, 2)).unwrap();
//! assert_eq!(r.shape(), &[5, 1]);
//! ```
//!
//! @version 0.1.0
//! @author Nums Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Array-specific allowances
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

// =============================================================================
// Modules
// =============================================================================

pub mod array;
pub mod creation;
pub mod shape;

// =============================================================================
// Re-exports
// =============================================================================

pub use array::NdArray;
pub use creation::*;
pub use nums_core::{Error, ErrorKind, Result};
pub use shape::{Shape, Strides};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::array::NdArray;
    pub use crate::creation::{
        arange, full, ones, parse_arange_args, try_full, try_ones, try_zeros, zeros, ArangeArgs,
    };
    pub use crate::shape::{Shape, Strides};
    pub use nums_core::{Error, ErrorKind, Result};
}
