//! Conditional file-generation resolution.
//!
//! Maps a [`ConfigModel`] to the concrete, deterministic set of output file
//! paths the generator would emit for it. Resolution walks the module type's
//! rule table in declaration order, evaluates each flag predicate, and
//! collects the substituted paths into an ordered, de-duplicated
//! [`ResolvedFileSet`]. Identical input always yields identical output,
//! order included, which keeps resolved sets directly diffable.

use tracing::debug;

use crate::config::ConfigModel;
use crate::core::GenverifyError;
use crate::rules;

/// Ordered set of distinct relative output paths.
///
/// Order is rule declaration order (first insertion wins), so two runs over
/// the same config produce byte-identical listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFileSet {
    paths: Vec<String>,
}

impl ResolvedFileSet {
    /// The resolved paths, in insertion order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Whether a path was resolved.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Whether no paths were resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of resolved paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    fn insert(&mut self, path: String) {
        if !self.contains(&path) {
            self.paths.push(path);
        }
    }
}

impl<'a> IntoIterator for &'a ResolvedFileSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Resolve the set of output files generated for a module configuration.
///
/// A disabled module resolves to the empty set before any flag is consulted;
/// enablement gates generation as a whole.
///
/// # Errors
///
/// - [`GenverifyError::UnknownModuleType`] when no rule table is registered
///   for the config's module type.
/// - [`GenverifyError::MalformedConfig`] when a matched rule needs a layer
///   for path substitution but the config declares none.
pub fn resolve(config: &ConfigModel) -> Result<ResolvedFileSet, GenverifyError> {
    if !config.enabled {
        debug!(module_id = %config.module_id, "module disabled, resolving empty set");
        return Ok(ResolvedFileSet::default());
    }

    let table = rules::table_for(&config.module_type).ok_or_else(|| {
        GenverifyError::UnknownModuleType {
            module_type: config.module_type.clone(),
        }
    })?;

    let mut resolved = ResolvedFileSet::default();
    for rule in &table.rules {
        if !rule.applies_to(config) {
            continue;
        }
        let path = rule.render_path(config).ok_or_else(|| {
            GenverifyError::MalformedConfig {
                module_id: config.module_id.clone(),
                reason: format!(
                    "rule '{}' needs a layer but the config declares none",
                    rule.path_template
                ),
            }
        })?;
        debug!(module_id = %config.module_id, path = %path, "rule matched");
        resolved.insert(path);
    }

    debug!(
        module_id = %config.module_id,
        count = resolved.len(),
        "resolution complete"
    );
    Ok(resolved)
}
