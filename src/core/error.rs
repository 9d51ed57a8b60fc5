//! Error handling for genverify
//!
//! The error system is built around two types:
//! - [`GenverifyError`] - enumerated error types for all failure cases
//! - [`ErrorContext`] - wrapper that adds user-friendly messages and suggestions
//!
//! # Error Scoping
//!
//! Errors in this crate are deliberately narrow in blast radius. A malformed
//! scenario config is fatal to that scenario only; a missing template is fatal
//! to the content rule that references it. The scenario runner accumulates
//! scoped failures into its report instead of propagating them, so a
//! [`GenverifyError`] only reaches the CLI when the harness itself cannot
//! proceed (suite file missing, suite file unparseable).
//!
//! # Examples
//!
//! ```rust,no_run
//! use genverify::core::{GenverifyError, user_friendly_error};
//!
//! fn load_suite() -> Result<(), GenverifyError> {
//!     Err(GenverifyError::SuiteNotFound {
//!         path: "genverify.toml".to_string(),
//!     })
//! }
//!
//! if let Err(e) = load_suite() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display();
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for genverify operations.
///
/// Each variant corresponds to one entry in the harness error taxonomy and
/// carries enough context to identify the offending scenario, rule, or file.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GenverifyError {
    /// A scenario's module configuration failed structural validation.
    ///
    /// Fatal to that scenario only. Raised when `module-id` is empty or
    /// `layers` is empty.
    #[error("Malformed module configuration '{module_id}': {reason}")]
    MalformedConfig {
        /// Module identifier from the offending config (may be empty).
        module_id: String,
        /// Human-readable description of the structural problem.
        reason: String,
    },

    /// No file rule table is registered for the requested module type.
    ///
    /// Fatal to that scenario's file check only.
    #[error("No file rules registered for module type '{module_type}'")]
    UnknownModuleType {
        /// The unrecognized module type.
        module_type: String,
    },

    /// A content rule referenced a template that does not exist under the
    /// templates root.
    #[error("Template not found: {path}")]
    TemplateNotFound {
        /// Template path relative to the templates root.
        path: String,
    },

    /// The template engine failed while rendering a template.
    #[error("Failed to render template '{path}': {reason}")]
    RenderError {
        /// Template path relative to the templates root.
        path: String,
        /// Engine-reported failure, flattened to a single line.
        reason: String,
    },

    /// The suite declaration file could not be found.
    #[error("Suite file not found: {path}")]
    SuiteNotFound {
        /// Path that was searched.
        path: String,
    },

    /// The suite declaration file exists but is not valid TOML, or does not
    /// match the expected schema.
    #[error("Invalid suite file {path}: {reason}")]
    SuiteParseError {
        /// Path of the offending file.
        path: String,
        /// Parser-reported failure.
        reason: String,
    },

    /// Wrapper for I/O failures outside the cases above.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Error wrapper that adds user-friendly context and suggestions.
///
/// Pairs the underlying error with an optional actionable suggestion and
/// optional background details, both rendered by [`ErrorContext::display`].
pub struct ErrorContext {
    /// The underlying error being wrapped.
    pub error: anyhow::Error,
    /// Actionable suggestion for resolving the error.
    pub suggestion: Option<String>,
    /// Additional background details.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from any error type.
    pub fn new(error: impl Into<anyhow::Error>) -> Self {
        Self {
            error: error.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Attach an actionable suggestion to this error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach background details to this error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error to stderr with colors and formatting.
    pub fn display(&self) {
        eprintln!("{} {}", "Error:".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("\n{} {}", "Details:".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{} {}", "Suggestion:".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Convert any error into a user-friendly [`ErrorContext`] with suggestions.
///
/// Downcasts to [`GenverifyError`] where possible and attaches a suggestion
/// appropriate to the failure category; other errors pass through unchanged.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let Some(gv) = error.downcast_ref::<GenverifyError>() else {
        return ErrorContext::new(error);
    };

    let (suggestion, details) = match gv {
        GenverifyError::SuiteNotFound {
            ..
        } => (
            Some("Create a genverify.toml suite file, or pass the suite path explicitly"),
            Some("genverify looks for genverify.toml in the current directory by default"),
        ),
        GenverifyError::SuiteParseError {
            ..
        } => (
            Some("Check the suite file for TOML syntax errors and misspelled keys"),
            None,
        ),
        GenverifyError::UnknownModuleType {
            ..
        } => (
            Some("Check the 'type' field of the scenario config against the registered module types"),
            None,
        ),
        GenverifyError::TemplateNotFound {
            ..
        } => (
            Some("Check the template path in the content rule and the --templates directory"),
            None,
        ),
        GenverifyError::MalformedConfig {
            ..
        } => (
            Some("Every scenario config needs a non-empty module-id and at least one layer"),
            None,
        ),
        _ => (None, None),
    };

    let mut ctx = ErrorContext::new(error);
    if let Some(s) = suggestion {
        ctx = ctx.with_suggestion(s);
    }
    if let Some(d) = details {
        ctx = ctx.with_details(d);
    }
    ctx
}
