//! Demo - Read/Write Round Trip Command
//!
//! Builds an array of sequential values, reads one element, overwrites it
//! and reads it back.
//!
//! @version 0.1.0
//! @author Nums Development Team

use nums_array::NdArray;

use super::utils::{print_header, print_kv, print_success};
use crate::config::DemoConfig;
use crate::error::CliResult;

// =============================================================================
// Execute Command
// =============================================================================

/// Execute the `demo` command
pub fn execute(config: &DemoConfig, quiet: bool) -> CliResult<()> {
    let mut array = sequential(&config.shape)?;
    let index = config.index.as_slice();

    if !quiet {
        print_header("nums demo");
        print_kv("array", &array.pretty_print());
    }

    let original = array.at(index)?;
    println!("Original value at {index:?}: {original}");

    array.set(config.value, index)?;

    let updated = array.at(index)?;
    println!("New value at {index:?}: {updated}");
    println!("Shape: {:?}", array.shape());

    if !quiet {
        print_success("write confirmed by read-back");
    }

    Ok(())
}

/// Array of `shape` holding `1, 2, ..., product(shape)` in row-major order.
fn sequential(shape: &[usize]) -> CliResult<NdArray> {
    Ok(NdArray::from_fn(shape, |i| (i + 1) as f64)?)
}

// =============================================================================
// Tests
// =============================================================================
