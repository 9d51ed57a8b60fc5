//! genverify - scenario-driven verification for module-based file generators
//!
//! A module-based infrastructure-as-code generator takes a module
//! configuration (a set of enabled feature flags) and emits files rendered
//! from templates. genverify checks that contract from the outside: which
//! files a configuration must (and must not) produce, and which
//! security-relevant fragments the rendered templates must (and must not)
//! contain.
//!
//! # Architecture Overview
//!
//! Suites are declared in a TOML file and evaluated against a template
//! tree:
//!
//! - Scenario declarations become a [`config::ConfigModel`] each
//! - [`resolver`] maps a config to the deterministic ordered set of output
//!   paths, driven by the per-module-type rule tables in [`rules`]
//! - [`templating::TemplateRenderer`] renders a named template against a
//!   config (the external-collaborator boundary, backed by Tera)
//! - [`validator`] checks rendered text against required/forbidden literal
//!   substring sets
//! - [`runner::ScenarioRunner`] orchestrates everything and owns reporting
//!
//! File checks decide scenario pass/fail; template content policies are a
//! separate module-wide gate reported independently. Every failure is
//! scoped to its scenario or rule, so one broken entry never hides the
//! results of the others.
//!
//! # Core Modules
//!
//! - [`cli`] - `run` and `validate` subcommands
//! - [`config`] - typed module configuration model
//! - [`core`] - error taxonomy and user-facing error context
//! - [`resolver`] - conditional file-generation resolution
//! - [`rules`] - static per-module-type file rule tables
//! - [`runner`] - scenario orchestration and reporting
//! - [`suite`] - suite declaration file parsing and linting
//! - [`templating`] - Tera-backed template rendering boundary
//! - [`validator`] - literal substring content policy checks
//!
//! # Example
//!
//! ```rust,no_run
//! use genverify::runner::ScenarioRunner;
//! use genverify::suite::SuiteFile;
//! use genverify::templating::TemplateRenderer;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let suite = SuiteFile::load(Path::new("genverify.toml"))?;
//! let renderer = TemplateRenderer::new("templates");
//! let report = ScenarioRunner::new(&suite, &renderer).run();
//! assert!(report.overall_passed());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;
pub mod rules;
pub mod runner;
pub mod suite;
pub mod templating;
pub mod validator;
