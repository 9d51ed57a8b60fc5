//! Run a verification suite.

use anyhow::{Result, bail};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

use super::DEFAULT_SUITE_FILE;
use crate::runner::ScenarioRunner;
use crate::suite::SuiteFile;
use crate::templating::TemplateRenderer;

/// Output format options for the suite report.
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with colors.
    Text,
    /// Structured JSON output for automation.
    Json,
}

/// Command to run a verification suite end to end.
///
/// Loads the suite file, evaluates every scenario's file assertions and
/// every module-wide template policy, prints the report, and exits non-zero
/// when either gate fails. Infrastructure errors (malformed configs,
/// unknown module types, missing templates) are scoped to their entry and
/// count as failures of that entry, never as an abort of the run.
#[derive(Args)]
pub struct RunCommand {
    /// Suite file to run (defaults to genverify.toml in the current directory)
    #[arg(value_name = "SUITE")]
    pub suite: Option<PathBuf>,

    /// Directory containing the generator's templates
    #[arg(long, value_name = "DIR")]
    pub templates: PathBuf,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Treat suite warnings (e.g. content rules with no assertions) as failures
    #[arg(long)]
    pub strict: bool,
}

impl RunCommand {
    /// Execute the run command.
    ///
    /// # Errors
    ///
    /// Returns an error when the suite cannot be loaded, when any scenario
    /// or content rule fails, or in strict mode when the suite has
    /// warnings.
    pub fn execute(self) -> Result<()> {
        let suite_path = self.suite.unwrap_or_else(|| PathBuf::from(DEFAULT_SUITE_FILE));
        let suite = SuiteFile::load(&suite_path)?;
        debug!(suite = %suite_path.display(), templates = %self.templates.display(), "starting run");

        let issues = suite.lint();
        if !issues.is_clean() {
            // Structural errors still do not abort the run: affected
            // scenarios surface their own scoped errors in the report.
            for error in &issues.errors {
                tracing::warn!("suite issue: {error}");
            }
        }

        let renderer = TemplateRenderer::new(self.templates);
        let report = ScenarioRunner::new(&suite, &renderer).run();

        match self.format {
            OutputFormat::Text => report.print_text(),
            OutputFormat::Json => println!("{}", report.to_json()?),
        }

        if self.strict && !issues.warnings.is_empty() {
            bail!("{} suite warning(s) in strict mode", issues.warnings.len());
        }

        if !report.overall_passed() {
            let failed_scenarios =
                report.scenarios.iter().filter(|s| !s.passed()).count();
            let failed_content = report.content.iter().filter(|c| !c.passed()).count();
            bail!(
                "verification failed: {failed_scenarios} scenario(s), {failed_content} template policy(ies)"
            );
        }
        Ok(())
    }
}
