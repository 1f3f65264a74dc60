//! Commands - CLI Command Implementations
//!
//! This module contains the implementations for all CLI commands.
//!
//! @version 0.1.0
//! @author Nums Development Team

pub mod arange;
pub mod demo;
pub mod fill;
pub mod utils;
