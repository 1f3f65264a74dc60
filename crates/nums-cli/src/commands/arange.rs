//! Arange - Integer Range Command
//!
//! Passes the raw command-line arguments through the same count and type
//! checks as any other untyped caller.
//!
//! @version 0.1.0
//! @author Nums Development Team

use nums_array::{arange, parse_arange_args};

use super::utils::print_array;
use crate::cli::RangeArgs;
use crate::error::CliResult;

/// Execute the `arange` command
pub fn execute(args: RangeArgs, quiet: bool) -> CliResult<()> {
    let range = parse_arange_args(&args.args)?;
    tracing::debug!(?range, "parsed arange arguments");

    let array = arange(range)?;
    print_array(&array, args.format, quiet)
}
