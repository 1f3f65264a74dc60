//! Nums CLI - Command Line Interface for the Nums Array Library
//!
//! The main entry point for the `nums` command-line tool.
//!
//! # Commands
//! - `nums demo` - Build an array, read, overwrite and re-read one element
//! - `nums zeros` - Print a zero-filled array of a given shape
//! - `nums ones` - Print a one-filled array of a given shape
//! - `nums arange` - Print an integer range as a column vector
//!
//! @version 0.1.0
//! @author Nums Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// CLI-specific allowances
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::float_cmp)]

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;

use cli::{Cli, Commands};
use config::CliConfig;
use error::CliResult;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => {
            let config = CliConfig::resolve(cli.config.as_deref())?;
            commands::demo::execute(&config.demo, cli.quiet)
        }
        Commands::Zeros(args) => commands::fill::execute(args, 0.0, cli.quiet),
        Commands::Ones(args) => commands::fill::execute(args, 1.0, cli.quiet),
        Commands::Arange(args) => commands::arange::execute(args, cli.quiet),
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// Target directives match by prefix, so `nums` also covers the
/// `nums_array` and `nums_core` library targets.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "nums=debug"
    } else {
        "nums=warn"
    }
}

/// Logs go to stderr so they never mix with printed arrays.
fn init_tracing(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
