//! Scenario orchestration.
//!
//! [`ScenarioRunner`] is the top-level consumer of the harness core: for
//! each declared scenario it builds the config, resolves the generated file
//! set, and compares it against the scenario's expected/forbidden
//! assertions; independently, it renders each module-wide template
//! validation and runs the content policy validator over the result. All
//! outcomes are accumulated into a [`SuiteReport`].
//!
//! # Failure scoping
//!
//! Failure is never fatal to the runner. Each scenario and each content
//! rule is evaluated independently; a malformed config, unknown module
//! type, or renderer failure is recorded as an infrastructure error on the
//! affected entry and the run continues. The report distinguishes
//! "could not evaluate" from "evaluated, and failed".
//!
//! # Pass/fail asymmetry
//!
//! A scenario passes iff its file check passes. Content rules are a
//! separate module-wide policy gate: their outcomes are reported alongside
//! the scenarios but never change a scenario's pass/fail. The CLI decides
//! how the two gates combine into an exit code.

mod report;

use serde::Serialize;
use tracing::debug;

use crate::config::ConfigModel;
use crate::resolver;
use crate::suite::{ContentRule, Scenario, SuiteFile};
use crate::templating::TemplateRenderer;
use crate::validator::{self, ValidationOutcome};

/// Evaluation states of a single scenario.
///
/// Scenarios move `Pending → FileCheckRunning → ContentCheckRunning →
/// Completed`. The content phase is shared by the whole suite (content
/// rules are module-wide), so every scenario passes through it together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioState {
    /// Not yet evaluated.
    Pending,
    /// File-existence assertions being checked.
    FileCheckRunning,
    /// Module-wide content rules being checked.
    ContentCheckRunning,
    /// Evaluation finished; see the result for pass/fail.
    Completed,
}

/// Result of one scenario's file check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenarioResult {
    /// Name of the scenario.
    pub scenario_name: String,
    /// Whether the file check passed (both diff sets empty).
    pub files_passed: bool,
    /// Expected paths absent from the resolved set.
    pub missing_files: Vec<String>,
    /// Forbidden paths present in the resolved set.
    pub unexpected_forbidden_files: Vec<String>,
    /// Infrastructure error that prevented evaluation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioResult {
    /// Whether the scenario was evaluated and passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.files_passed
    }

    fn errored(scenario_name: &str, error: String) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            files_passed: false,
            missing_files: Vec::new(),
            unexpected_forbidden_files: Vec::new(),
            error: Some(error),
        }
    }
}

/// Status of one content rule after a run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ContentStatus {
    /// The rule was evaluated; the outcome carries pass/fail detail.
    Checked {
        /// Validator outcome, offending fragment included on failure.
        outcome: ValidationOutcome,
    },
    /// The rule could not be evaluated (template missing, render failure).
    Error {
        /// What prevented evaluation.
        message: String,
    },
}

/// Outcome of one module-wide content rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ContentOutcome {
    /// Name of the content rule.
    pub rule_name: String,
    /// Template the rule rendered.
    pub template: String,
    /// Evaluation status.
    #[serde(flatten)]
    pub status: ContentStatus,
}

impl ContentOutcome {
    /// Whether the rule was evaluated and passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(&self.status, ContentStatus::Checked { outcome } if outcome.passed())
    }
}

/// Aggregated results of a full suite run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SuiteReport {
    /// Identifier of the module under test.
    pub module_id: String,
    /// Display name of the module under test, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    /// Per-scenario file check results, in declaration order.
    pub scenarios: Vec<ScenarioResult>,
    /// Module-wide content rule outcomes, in declaration order.
    pub content: Vec<ContentOutcome>,
}

impl SuiteReport {
    /// Whether every scenario was evaluated and passed.
    #[must_use]
    pub fn scenarios_passed(&self) -> bool {
        self.scenarios.iter().all(ScenarioResult::passed)
    }

    /// Whether every content rule was evaluated and passed.
    #[must_use]
    pub fn content_passed(&self) -> bool {
        self.content.iter().all(ContentOutcome::passed)
    }

    /// Whether both gates passed.
    #[must_use]
    pub fn overall_passed(&self) -> bool {
        self.scenarios_passed() && self.content_passed()
    }
}

/// Runs a suite against a template renderer.
pub struct ScenarioRunner<'a> {
    suite: &'a SuiteFile,
    renderer: &'a TemplateRenderer,
}

impl<'a> ScenarioRunner<'a> {
    /// Create a runner for one suite.
    pub fn new(suite: &'a SuiteFile, renderer: &'a TemplateRenderer) -> Self {
        Self {
            suite,
            renderer,
        }
    }

    /// Evaluate every scenario and every content rule.
    ///
    /// Never fails: all errors are scoped to their originating entry and
    /// recorded in the report.
    #[must_use]
    pub fn run(&self) -> SuiteReport {
        let scenarios = self
            .suite
            .scenarios
            .iter()
            .map(|scenario| {
                debug!(
                    scenario = %scenario.name,
                    state = ?ScenarioState::FileCheckRunning,
                    "evaluating scenario"
                );
                run_file_check(scenario)
            })
            .collect();

        debug!(state = ?ScenarioState::ContentCheckRunning, "evaluating module-wide content rules");
        let content = self.run_content_rules();
        debug!(state = ?ScenarioState::Completed, "suite run finished");

        SuiteReport {
            module_id: self.suite.module_id.clone(),
            module_name: self.suite.module_name.clone(),
            scenarios,
            content,
        }
    }

    fn run_content_rules(&self) -> Vec<ContentOutcome> {
        let config = self.suite.effective_render_config();
        self.suite
            .template_validations
            .iter()
            .map(|rule| match config {
                Some(config) => run_content_rule(rule, self.renderer, config),
                None => ContentOutcome {
                    rule_name: rule.name.clone(),
                    template: rule.template.clone(),
                    status: ContentStatus::Error {
                        message: "no render configuration available".to_string(),
                    },
                },
            })
            .collect()
    }
}

/// Check one scenario's file assertions.
fn run_file_check(scenario: &Scenario) -> ScenarioResult {
    debug!(scenario = %scenario.name, "file check");

    if let Err(e) = scenario.config.validate() {
        return ScenarioResult::errored(&scenario.name, e.to_string());
    }

    let resolved = match resolver::resolve(&scenario.config) {
        Ok(resolved) => resolved,
        Err(e) => return ScenarioResult::errored(&scenario.name, e.to_string()),
    };

    let missing_files: Vec<String> = scenario
        .expected_files
        .iter()
        .filter(|path| !resolved.contains(path))
        .cloned()
        .collect();
    let unexpected_forbidden_files: Vec<String> = scenario
        .forbidden_files
        .iter()
        .filter(|path| resolved.contains(path))
        .cloned()
        .collect();

    let files_passed = missing_files.is_empty() && unexpected_forbidden_files.is_empty();
    ScenarioResult {
        scenario_name: scenario.name.clone(),
        files_passed,
        missing_files,
        unexpected_forbidden_files,
        error: None,
    }
}

/// Render and check one module-wide content rule.
fn run_content_rule(
    rule: &ContentRule,
    renderer: &TemplateRenderer,
    config: &ConfigModel,
) -> ContentOutcome {
    debug!(rule = %rule.name, template = %rule.template, "content check");

    let status = match renderer.render(&rule.template, config) {
        Ok(text) => ContentStatus::Checked {
            outcome: validator::check(&text, rule),
        },
        Err(e) => ContentStatus::Error {
            message: e.to_string(),
        },
    };

    ContentOutcome {
        rule_name: rule.name.clone(),
        template: rule.template.clone(),
        status,
    }
}
