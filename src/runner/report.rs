//! Report rendering for suite runs.

use colored::Colorize;

use super::{ContentStatus, SuiteReport};
use crate::validator::ValidationOutcome;

impl SuiteReport {
    /// Print the report as human-readable colored text to stdout.
    pub fn print_text(&self) {
        let title = self.module_name.as_deref().unwrap_or(&self.module_id);
        println!("{} {}", "Verifying".bold(), title.bold());

        if !self.scenarios.is_empty() {
            println!("\n{}", "Scenarios:".bold());
            for result in &self.scenarios {
                if let Some(error) = &result.error {
                    println!("  {} {} (error: {})", "⚠".yellow(), result.scenario_name, error);
                    continue;
                }
                if result.passed() {
                    println!("  {} {}", "✓".green(), result.scenario_name);
                } else {
                    println!("  {} {}", "✗".red(), result.scenario_name);
                    for path in &result.missing_files {
                        println!("      missing expected file: {}", path.red());
                    }
                    for path in &result.unexpected_forbidden_files {
                        println!("      forbidden file generated: {}", path.red());
                    }
                }
            }
        }

        if !self.content.is_empty() {
            println!("\n{}", "Template policies:".bold());
            for outcome in &self.content {
                match &outcome.status {
                    ContentStatus::Checked {
                        outcome: ValidationOutcome::Pass,
                    } => {
                        println!("  {} {}", "✓".green(), outcome.rule_name);
                    }
                    ContentStatus::Checked {
                        outcome: ValidationOutcome::MissingRequired {
                            fragment,
                        },
                    } => {
                        println!("  {} {}", "✗".red(), outcome.rule_name);
                        println!("      required fragment not found: {}", fragment.red());
                    }
                    ContentStatus::Checked {
                        outcome: ValidationOutcome::ForbiddenPresent {
                            fragment,
                        },
                    } => {
                        println!("  {} {}", "✗".red(), outcome.rule_name);
                        println!("      forbidden fragment present: {}", fragment.red());
                    }
                    ContentStatus::Error {
                        message,
                    } => {
                        println!("  {} {} (error: {})", "⚠".yellow(), outcome.rule_name, message);
                    }
                }
            }
        }

        println!();
        let scenarios_label = format!(
            "{}/{} scenarios passed",
            self.scenarios.iter().filter(|s| s.passed()).count(),
            self.scenarios.len()
        );
        let content_label = format!(
            "{}/{} template policies passed",
            self.content.iter().filter(|c| c.passed()).count(),
            self.content.len()
        );
        if self.overall_passed() {
            println!("{} {scenarios_label}, {content_label}", "PASS".green().bold());
        } else {
            println!("{} {scenarios_label}, {content_label}", "FAIL".red().bold());
        }
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails, which only happens if a
    /// report field cannot be represented as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "kebab-case")]
        struct JsonReport<'a> {
            passed: bool,
            scenarios_passed: bool,
            content_passed: bool,
            #[serde(flatten)]
            report: &'a SuiteReport,
        }

        serde_json::to_string_pretty(&JsonReport {
            passed: self.overall_passed(),
            scenarios_passed: self.scenarios_passed(),
            content_passed: self.content_passed(),
            report: self,
        })
    }
}
