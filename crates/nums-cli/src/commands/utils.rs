//! Utils - Common Utilities for CLI Commands
//!
//! Shared output helpers used across CLI commands.
//!
//! @version 0.1.0
//! @author Nums Development Team

use colored::Colorize;
use serde::Serialize;

use nums_array::NdArray;

use crate::cli::OutputFormat;
use crate::error::CliResult;

// =============================================================================
// Output Formatting
// =============================================================================

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a header
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

// =============================================================================
// Array Output
// =============================================================================

/// JSON form of a printed array
#[derive(Serialize)]
struct ArrayReport<'a> {
    ndim: usize,
    size: usize,
    strides: &'a [isize],
    array: &'a NdArray,
}

/// Print an array in the requested format.
///
/// Text output is the nested bracket rendering, followed by its metadata
/// unless `quiet` is set.
pub fn print_array(array: &NdArray, format: OutputFormat, quiet: bool) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let report = ArrayReport {
                ndim: array.ndim(),
                size: array.size(),
                strides: array.strides(),
                array,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{}", array.pretty_print());
            if !quiet {
                print_kv("shape", &format!("{:?}", array.shape()));
                print_kv("strides", &format!("{:?}", array.strides()));
                print_kv("ndim", &array.ndim().to_string());
                print_kv("size", &array.size().to_string());
            }
        }
    }
    Ok(())
}
