//! genverify CLI entry point
//!
//! Parses command-line arguments, dispatches to the subcommand, and turns
//! failures into user-friendly error output with a non-zero exit code.

use anyhow::Result;
use clap::Parser;
use genverify::cli;
use genverify::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
