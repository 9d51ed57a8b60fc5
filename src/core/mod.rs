//! Core types and error handling for genverify.
//!
//! This module hosts the error taxonomy shared by every component of the
//! harness. All fallible operations in the library return
//! [`GenverifyError`] (directly or through `anyhow`), and the CLI converts
//! failures into user-facing messages via [`user_friendly_error`].

pub mod error;

pub use error::{ErrorContext, GenverifyError, user_friendly_error};
