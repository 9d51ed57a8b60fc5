//! Command-line interface for genverify.
//!
//! Two subcommands cover the harness surface:
//! - `run` - execute a suite: file checks for every scenario, content
//!   policies for every template validation, then a report
//! - `validate` - structurally check a suite file without running it
//!
//! Global flags `--verbose` and `--quiet` control log verbosity for all
//! subcommands.
//!
//! # Examples
//!
//! ```bash
//! # Run the suite in the current directory against a template tree
//! genverify run --templates ./templates
//!
//! # Run a specific suite, machine-readable output
//! genverify run suites/aws.toml --templates ./templates --format json
//!
//! # Check a suite file before committing it
//! genverify validate suites/aws.toml
//! ```

mod run;
mod validate;

pub use run::{OutputFormat, RunCommand};
pub use validate::ValidateCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Default suite file name looked up in the current directory.
pub const DEFAULT_SUITE_FILE: &str = "genverify.toml";

/// Runtime configuration derived from global CLI flags.
///
/// Holds the settings that would otherwise be read from environment
/// variables, so tests and programmatic callers can inject them without
/// touching global state.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level filter, `None` to leave logging uninitialized.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Install the tracing subscriber for this configuration.
    ///
    /// `RUST_LOG` wins over the CLI-derived level when set. Safe to call
    /// more than once; later calls are no-ops.
    pub fn init_tracing(&self) {
        let Some(level) = &self.log_level else {
            return;
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.clone()));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// Main CLI application structure for genverify.
#[derive(Parser)]
#[command(
    name = "genverify",
    about = "Scenario-driven verification for module-based file generators",
    version,
    long_about = "genverify checks a module generator's output contract: which files a \
                  module configuration produces, and which security-relevant fragments \
                  its rendered templates must or must not contain."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors and the final report.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Run a suite: scenario file checks plus template content policies
    Run(RunCommand),
    /// Structurally validate a suite file without running it
    Validate(ValidateCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error when the command fails; the caller is responsible
    /// for user-facing display and the process exit code.
    pub fn execute(self) -> Result<()> {
        self.build_config().init_tracing();

        match self.command {
            Commands::Run(cmd) => cmd.execute(),
            Commands::Validate(cmd) => cmd.execute(),
        }
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("warn".to_string())
        };
        CliConfig {
            log_level,
        }
    }
}
