//! Fill - Constant Array Commands
//!
//! Implements `zeros` and `ones`. The shape comes from the command line, so
//! oversized shapes are reported as errors.
//!
//! @version 0.1.0
//! @author Nums Development Team

use super::utils::print_array;
use crate::cli::FillArgs;
use crate::error::CliResult;

/// Execute the `zeros` or `ones` command
pub fn execute(args: FillArgs, value: f64, quiet: bool) -> CliResult<()> {
    let array = nums_array::try_full(&args.shape, value)?;
    print_array(&array, args.format, quiet)
}
