//! Suite declaration file parsing and structural validation.
//!
//! A suite file is the sole authored input of the harness: an ordered list
//! of scenarios (module config plus expected/forbidden file assertions) and
//! an ordered list of module-wide template content validations. It is data,
//! not code, and lives in a TOML file (`genverify.toml` by default).
//!
//! # Format
//!
//! ```toml
//! module-id = "provider-aws"
//! module-name = "AWS Infrastructure"
//!
//! [[scenarios]]
//! name = "aws-basic"
//! description = "Basic AWS infrastructure with S3 and RDS"
//! expected-files = ["ops/aws/s3-config.yaml", "ops/aws/rds-config.yaml"]
//!
//! [scenarios.config]
//! module-id = "aws-infra"
//! type = "aws"
//! layers = ["ops"]
//!
//! [scenarios.config.field-values]
//! enableS3 = true
//! enableRDS = true
//!
//! [[template-validations]]
//! name = "tls-1-3-policy"
//! template = "provider-aws/terraform/load_balancer.tf"
//! contains = ['ssl_policy        = "ELBSecurityPolicy-TLS13-1-2-2021-06"']
//! not-contains = ['ssl_policy        = "ELBSecurityPolicy-TLS-1-2-2017-01"']
//! ```
//!
//! File paths in assertions are plain POSIX-style relative strings,
//! case-sensitive, no trailing slashes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::config::ConfigModel;
use crate::core::GenverifyError;
use crate::rules;

/// A named test case pairing a module configuration with file assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scenario {
    /// Unique scenario name, used as the report key.
    pub name: String,

    /// Human-readable description of what the scenario covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Module configuration the scenario evaluates.
    pub config: ConfigModel,

    /// Paths that must be present in the resolved file set.
    ///
    /// Absent or empty means no assertion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected_files: Vec<String>,

    /// Paths that must be absent from the resolved file set.
    ///
    /// Absent or empty means no assertion.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbidden_files: Vec<String>,
}

/// An assertion over the rendered text of one template.
///
/// Matching is literal, case-sensitive, and whitespace-exact. Rules encode
/// exact rendered formatting (fixed-width alignment included), so entries
/// must be authored byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContentRule {
    /// Unique rule name, used as the report key.
    pub name: String,

    /// Human-readable description, typically the policy being enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Template path relative to the templates root.
    pub template: String,

    /// Substrings that must all appear in the rendered text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<String>,

    /// Substrings that must all be absent from the rendered text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_contains: Vec<String>,
}

impl ContentRule {
    /// Whether the rule asserts anything at all.
    ///
    /// An all-empty rule is legal but has no assertive value; suite linting
    /// flags it as a warning.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.contains.is_empty() && self.not_contains.is_empty()
    }
}

/// A complete parsed suite declaration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SuiteFile {
    /// Identifier of the module under test.
    pub module_id: String,

    /// Display name of the module under test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// Configuration used to render module-wide template validations.
    ///
    /// When absent, the first scenario's config is used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_config: Option<ConfigModel>,

    /// Scenarios, evaluated in declaration order.
    #[serde(default)]
    pub scenarios: Vec<Scenario>,

    /// Module-wide template content validations, evaluated once per run.
    #[serde(default)]
    pub template_validations: Vec<ContentRule>,
}

/// Issues found by structural validation of a suite file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteIssues {
    /// Problems that make the suite unrunnable or a scenario unevaluable.
    pub errors: Vec<String>,
    /// Problems worth surfacing that do not block a run.
    pub warnings: Vec<String>,
}

impl SuiteIssues {
    /// Whether no errors were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl SuiteFile {
    /// Load and parse a suite file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`GenverifyError::SuiteNotFound`] when the path does not
    /// exist and [`GenverifyError::SuiteParseError`] when the content is not
    /// valid TOML or does not match the schema.
    pub fn load(path: &Path) -> Result<Self, GenverifyError> {
        if !path.exists() {
            return Err(GenverifyError::SuiteNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let suite = Self::parse(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            scenarios = suite.scenarios.len(),
            content_rules = suite.template_validations.len(),
            "loaded suite"
        );
        Ok(suite)
    }

    /// Parse suite content, attributing failures to `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GenverifyError::SuiteParseError`] on TOML or schema errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self, GenverifyError> {
        toml::from_str(content).map_err(|e| GenverifyError::SuiteParseError {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// The configuration used to render module-wide template validations.
    #[must_use]
    pub fn effective_render_config(&self) -> Option<&ConfigModel> {
        self.render_config
            .as_ref()
            .or_else(|| self.scenarios.first().map(|s| &s.config))
    }

    /// Structurally validate the suite without running it.
    ///
    /// Checks scenario name uniqueness, per-scenario config invariants,
    /// rule table availability for every scenario's module type, content
    /// rule name uniqueness, and vacuous content rules.
    #[must_use]
    pub fn lint(&self) -> SuiteIssues {
        let mut issues = SuiteIssues::default();

        if self.module_id.trim().is_empty() {
            issues.errors.push("suite module-id must not be empty".to_string());
        }

        let mut seen_scenarios = Vec::new();
        for scenario in &self.scenarios {
            if seen_scenarios.contains(&scenario.name.as_str()) {
                issues.errors.push(format!("duplicate scenario name '{}'", scenario.name));
            }
            seen_scenarios.push(scenario.name.as_str());

            if let Err(e) = scenario.config.validate() {
                issues.errors.push(format!("scenario '{}': {}", scenario.name, e));
            }

            if rules::table_for(&scenario.config.module_type).is_none() {
                let mut msg = format!(
                    "scenario '{}': no file rules registered for module type '{}'",
                    scenario.name, scenario.config.module_type
                );
                if let Some(suggestion) = rules::suggest_type(&scenario.config.module_type) {
                    msg.push_str(&format!(" (did you mean '{suggestion}'?)"));
                }
                issues.errors.push(msg);
            }
        }

        let mut seen_rules = Vec::new();
        for rule in &self.template_validations {
            if seen_rules.contains(&rule.name.as_str()) {
                issues.errors.push(format!("duplicate content rule name '{}'", rule.name));
            }
            seen_rules.push(rule.name.as_str());

            if rule.is_vacuous() {
                issues.warnings.push(format!(
                    "content rule '{}' has no contains or not-contains entries",
                    rule.name
                ));
            }
        }

        if !self.template_validations.is_empty() && self.effective_render_config().is_none() {
            issues.errors.push(
                "template validations declared but no render-config and no scenarios to borrow one from"
                    .to_string(),
            );
        }

        issues
    }
}
