//! Integration test suite for genverify
//!
//! End-to-end tests that exercise the CLI binary against on-disk suite
//! files and template trees.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! Tests are organized by functionality area:
//! - **run**: the `run` subcommand, both output formats, exit codes
//! - **validate**: the `validate` subcommand and suite linting

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod run;
