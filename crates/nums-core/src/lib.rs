//! Nums Core - Foundation Layer for the Nums Array Workspace
//!
//! This crate holds the pieces shared by every other crate in the workspace.
//! Today that is the error taxonomy: every fallible array operation returns
//! [`Result`], and every failure is one [`Error`] variant.
//!
//! # Example
//! ```rust
//! use nums_core::{Error, ErrorKind};
//!
//! let err = Error::index_out_of_range(2, 5, 3);
//! assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
//! assert!(err.to_string().contains("position 2"));
//! ```
//!
//! @version 0.1.0
//! @author Nums Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, ErrorKind, Result};

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
}
