//! Template content policy validation.
//!
//! Checks rendered template text against a [`ContentRule`]'s required and
//! forbidden substring sets. Matching is literal, case-sensitive, and
//! whitespace-exact: rules encode exact rendered formatting (fixed-width
//! alignment included), so the validator's fidelity to literal bytes is a
//! design requirement, not an oversight. No normalization, no tokenization,
//! partial-word matches count.

use serde::Serialize;

use crate::suite::ContentRule;

/// Outcome of checking one content rule against rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "kebab-case")]
pub enum ValidationOutcome {
    /// Every required substring was found and no forbidden substring was.
    Pass,
    /// A required substring was not found. Checking short-circuits on the
    /// first miss; later entries are not examined.
    MissingRequired {
        /// The required substring that was absent.
        fragment: String,
    },
    /// A forbidden substring was found. Only reached when every required
    /// substring was present; short-circuits on the first hit.
    ForbiddenPresent {
        /// The forbidden substring that was present.
        fragment: String,
    },
}

impl ValidationOutcome {
    /// Whether the rule passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The offending fragment of a failed check, if any.
    #[must_use]
    pub fn failed_assertion(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::MissingRequired {
                fragment,
            }
            | Self::ForbiddenPresent {
                fragment,
            } => Some(fragment),
        }
    }
}

/// Check rendered text against a content rule.
///
/// The `contains` phase runs first and short-circuits on the first missing
/// entry; the `not-contains` phase runs only afterwards and short-circuits
/// on the first forbidden hit. A rule with no entries in either list passes
/// vacuously.
#[must_use]
pub fn check(text: &str, rule: &ContentRule) -> ValidationOutcome {
    for required in &rule.contains {
        if !text.contains(required.as_str()) {
            return ValidationOutcome::MissingRequired {
                fragment: required.clone(),
            };
        }
    }
    for forbidden in &rule.not_contains {
        if text.contains(forbidden.as_str()) {
            return ValidationOutcome::ForbiddenPresent {
                fragment: forbidden.clone(),
            };
        }
    }
    ValidationOutcome::Pass
}
