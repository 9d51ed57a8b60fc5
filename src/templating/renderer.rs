//! Tera-backed template renderer.

use std::path::{Component, Path, PathBuf};
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::config::{ConfigModel, FieldValue};
use crate::core::GenverifyError;

/// Renders named templates against a module configuration.
///
/// Templates are plain files under a single templates root, addressed by
/// POSIX-style relative paths. Rendering is a pure function of the template
/// content and the configuration; the renderer holds no mutable state, so a
/// shared instance is safe for concurrent use.
///
/// # Context
///
/// The rendering context exposes `module_id`, `module_type`, `layers`, and
/// `enabled`, plus every entry of the config's field values as a top-level
/// variable under its own key (`enableS3`, `awsRegion`, ...). Reserved names
/// win on collision so templates can always rely on the module identity.
pub struct TemplateRenderer {
    templates_root: PathBuf,
}

impl TemplateRenderer {
    /// Create a renderer over a templates root directory.
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            templates_root: templates_root.into(),
        }
    }

    /// The templates root this renderer reads from.
    #[must_use]
    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    /// Render a template against a module configuration.
    ///
    /// # Errors
    ///
    /// - [`GenverifyError::TemplateNotFound`] when `template` does not name
    ///   a file under the templates root (parent traversal and absolute
    ///   paths are treated as not found).
    /// - [`GenverifyError::RenderError`] when the engine rejects the
    ///   template, e.g. on syntax errors or unresolved variables.
    pub fn render(&self, template: &str, config: &ConfigModel) -> Result<String, GenverifyError> {
        let relative = Path::new(template);
        let escapes_root = relative.is_absolute()
            || relative.components().any(|c| matches!(c, Component::ParentDir));
        let path = self.templates_root.join(relative);
        if escapes_root || !path.is_file() {
            return Err(GenverifyError::TemplateNotFound {
                path: template.to_string(),
            });
        }

        let raw = std::fs::read_to_string(&path)?;
        let context = build_context(config);
        debug!(template = %template, module_id = %config.module_id, "rendering template");

        Tera::one_off(&raw, &context, false).map_err(|e| GenverifyError::RenderError {
            path: template.to_string(),
            reason: flatten_tera_error(&e),
        })
    }
}

/// Build the Tera context for one configuration.
fn build_context(config: &ConfigModel) -> TeraContext {
    let mut context = TeraContext::new();
    for (key, value) in &config.field_values {
        match value {
            FieldValue::Bool(b) => context.insert(key, b),
            FieldValue::Text(s) => context.insert(key, s),
        }
    }
    // Reserved names last: they win over colliding field values.
    context.insert("module_id", &config.module_id);
    context.insert("module_type", &config.module_type);
    context.insert("layers", &config.layers);
    context.insert("enabled", &config.enabled);
    context
}

/// Collapse a Tera error chain into a single-line reason.
fn flatten_tera_error(error: &tera::Error) -> String {
    use std::error::Error as _;

    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}
