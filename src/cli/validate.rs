//! Structurally validate a suite file.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::DEFAULT_SUITE_FILE;
use crate::suite::SuiteFile;

/// Command to check a suite file without running it.
///
/// Catches authoring mistakes early: TOML syntax errors, duplicate scenario
/// or rule names, malformed module configs, module types with no registered
/// rule table, and content rules that assert nothing.
#[derive(Args)]
pub struct ValidateCommand {
    /// Suite file to validate (defaults to genverify.toml in the current directory)
    #[arg(value_name = "SUITE")]
    pub suite: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// # Errors
    ///
    /// Returns an error when the suite cannot be loaded, when structural
    /// errors are found, or in strict mode when warnings are found.
    pub fn execute(self) -> Result<()> {
        let suite_path = self.suite.unwrap_or_else(|| PathBuf::from(DEFAULT_SUITE_FILE));
        let suite = SuiteFile::load(&suite_path)?;
        let issues = suite.lint();

        for error in &issues.errors {
            println!("{} {error}", "✗".red());
        }
        for warning in &issues.warnings {
            println!("{} {warning}", "⚠".yellow());
        }

        if !issues.is_clean() {
            bail!("suite file has {} error(s)", issues.errors.len());
        }
        if self.strict && !issues.warnings.is_empty() {
            bail!("suite file has {} warning(s) in strict mode", issues.warnings.len());
        }

        println!(
            "{} {} ({} scenario(s), {} template validation(s))",
            "✓".green(),
            suite_path.display(),
            suite.scenarios.len(),
            suite.template_validations.len()
        );
        Ok(())
    }
}
