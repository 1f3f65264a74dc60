//! CLI - Command Line Interface Definitions
//!
//! Defines the CLI structure using clap derive macros.
//!
//! @version 0.1.0
//! @author Nums Development Team

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Nums - row-major N-dimensional arrays
#[derive(Parser, Debug)]
#[command(
    name = "nums",
    author = "Nums Development Team",
    version,
    about = "Build, index and print N-dimensional f64 arrays"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except the array itself and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a nums.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an array, read an element, overwrite it and read it back
    Demo,

    /// Print a zero-filled array
    Zeros(FillArgs),

    /// Print a one-filled array
    Ones(FillArgs),

    /// Print an integer range as a column vector
    Arange(RangeArgs),
}

// =============================================================================
// Command Arguments
// =============================================================================

/// Output format for printed arrays
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Nested brackets plus metadata
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Arguments for `zeros` and `ones`
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Comma-separated dimensions, e.g. 2,3,2
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub shape: Vec<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for `arange`
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// STOP | START STOP | START STOP STEP
    #[arg(allow_hyphen_values = true)]
    pub args: Vec<String>,
}
