//! File generation rule tables.
//!
//! Each module type has a fixed, ordered table of [`FileRule`]s describing
//! which output files the generator emits for a given configuration. Rule
//! tables are registered once in a static registry and are immutable after
//! registration; the resolver looks them up by module type.
//!
//! Flag-driven inclusion is deliberately enum-keyed per module type (see
//! [`aws::AwsFeature`]): every feature of a table is a variant, and the flag
//! key and output path for each variant come from exhaustive `match`es, so a
//! typo in a flag name is a compile error instead of a silently-false
//! predicate.

pub mod aws;

use std::sync::OnceLock;

use crate::config::ConfigModel;

/// A single conditional file-generation rule.
///
/// Pairs a feature flag predicate with an output path template. Path
/// templates may embed `{layer}` (replaced with the config's primary layer)
/// and `{type}` (replaced with the module type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRule {
    /// Feature flag key consulted in the config's field values, or `None`
    /// for a rule that applies unconditionally.
    pub flag: Option<&'static str>,
    /// Output path template with `{layer}` and `{type}` placeholders.
    pub path_template: &'static str,
}

impl FileRule {
    /// Evaluate this rule's predicate against a configuration.
    ///
    /// Total over every [`ConfigModel`]: a missing or non-boolean flag value
    /// reads as `false`.
    #[must_use]
    pub fn applies_to(&self, config: &ConfigModel) -> bool {
        match self.flag {
            Some(flag) => config.flag(flag),
            None => true,
        }
    }

    /// Substitute path placeholders from the configuration.
    ///
    /// Returns `None` when the template needs `{layer}` but the config has
    /// no layers; the resolver turns that into a malformed-config error.
    #[must_use]
    pub fn render_path(&self, config: &ConfigModel) -> Option<String> {
        let mut path = self.path_template.to_string();
        if path.contains("{layer}") {
            let layer = config.primary_layer()?;
            path = path.replace("{layer}", layer);
        }
        path = path.replace("{type}", &config.module_type);
        Some(path)
    }
}

/// An ordered rule table for one module type.
#[derive(Debug)]
pub struct RuleTable {
    /// Module type this table serves.
    pub module_type: &'static str,
    /// Rules in declaration order. Resolution order follows this order.
    pub rules: Vec<FileRule>,
}

/// All registered rule tables.
///
/// Built once on first access; entries are immutable after registration.
fn registry() -> &'static [RuleTable] {
    static REGISTRY: OnceLock<Vec<RuleTable>> = OnceLock::new();
    REGISTRY.get_or_init(|| vec![aws::table()])
}

/// Look up the rule table for a module type.
#[must_use]
pub fn table_for(module_type: &str) -> Option<&'static RuleTable> {
    registry().iter().find(|t| t.module_type == module_type)
}

/// Names of all module types with a registered rule table.
#[must_use]
pub fn known_types() -> Vec<&'static str> {
    registry().iter().map(|t| t.module_type).collect()
}

/// Suggest the closest registered module type for an unknown one.
///
/// Uses Damerau-Levenshtein distance (transpositions are a single edit,
/// catching the common `asw` typo) with a 50% similarity cutoff, so wild
/// mismatches produce no suggestion rather than a misleading one.
#[must_use]
pub fn suggest_type(unknown: &str) -> Option<&'static str> {
    known_types()
        .into_iter()
        .map(|known| (strsim::damerau_levenshtein(unknown, known), known))
        .filter(|(distance, known)| *distance * 2 <= known.len().max(unknown.len()))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known)
}
