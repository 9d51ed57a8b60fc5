//! Module configuration model.
//!
//! [`ConfigModel`] is the typed representation of a generator module: its
//! identity, kind, type, layer placement, enablement, and feature flag map.
//! It is constructed once per scenario evaluation (deserialized from the
//! suite file) and treated as immutable thereafter.
//!
//! # Field Values
//!
//! The `field-values` table carries the module's feature flags. Values are
//! either booleans (feature toggles such as `enableS3`) or strings (settings
//! such as `awsRegion`). Keys follow the generator's own vocabulary, so they
//! are kept verbatim rather than renamed; unknown keys are tolerated and
//! simply never consulted.
//!
//! # Example
//!
//! ```toml
//! [scenarios.config]
//! module-id = "aws-infra"
//! kind = "extension"
//! type = "aws"
//! layers = ["ops"]
//! enabled = true
//!
//! [scenarios.config.field-values]
//! awsRegion = "us-east-1"
//! enableS3 = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::GenverifyError;

/// The kind of a generator module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// An optional extension module layered onto a project.
    #[default]
    Extension,
    /// A core module that is part of the base project scaffold.
    Core,
}

/// A single feature flag or setting value.
///
/// Deserialized untagged, so TOML booleans become [`FieldValue::Bool`] and
/// TOML strings become [`FieldValue::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A boolean feature toggle.
    Bool(bool),
    /// A string-valued setting.
    Text(String),
}

/// Typed representation of a module configuration.
///
/// This is a pure data holder: the only behavior is [`ConfigModel::validate`].
/// `BTreeMap` keeps the flag map deterministically ordered, which keeps
/// everything downstream (rendering context, reports) reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigModel {
    /// Unique identifier of the module instance.
    pub module_id: String,

    /// Module kind. Defaults to `extension`.
    #[serde(default)]
    pub kind: ModuleKind,

    /// Module type, selecting the file rule table (e.g. `aws`).
    #[serde(rename = "type")]
    pub module_type: String,

    /// Deployment-stage layers; `layers[0]` namespaces generated paths.
    #[serde(default)]
    pub layers: Vec<String>,

    /// Whether the module is enabled. A disabled module generates nothing.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Feature flags and settings, keyed by the generator's vocabulary.
    #[serde(default)]
    pub field_values: BTreeMap<String, FieldValue>,
}

fn default_enabled() -> bool {
    true
}

impl ConfigModel {
    /// Validate the structural invariants of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenverifyError::MalformedConfig`] when `module_id` is empty
    /// or `layers` is empty.
    pub fn validate(&self) -> Result<(), GenverifyError> {
        if self.module_id.trim().is_empty() {
            return Err(GenverifyError::MalformedConfig {
                module_id: self.module_id.clone(),
                reason: "module-id must not be empty".to_string(),
            });
        }
        if self.layers.is_empty() {
            return Err(GenverifyError::MalformedConfig {
                module_id: self.module_id.clone(),
                reason: "layers must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Look up a boolean feature flag.
    ///
    /// Missing keys and non-boolean values both read as `false`, keeping
    /// flag predicate evaluation total.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.field_values.get(key), Some(FieldValue::Bool(true)))
    }

    /// Look up a string-valued setting.
    #[must_use]
    pub fn setting(&self, key: &str) -> Option<&str> {
        match self.field_values.get(key) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The primary layer used to namespace generated file paths.
    #[must_use]
    pub fn primary_layer(&self) -> Option<&str> {
        self.layers.first().map(String::as_str)
    }
}
