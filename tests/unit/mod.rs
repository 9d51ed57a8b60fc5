//! Unit test suite for genverify
//!
//! Library-level tests exercising the public API end to end against the AWS
//! provider fixture, without going through the CLI binary.
//!
//! ```bash
//! cargo test --test unit
//! ```

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;
