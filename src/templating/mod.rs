//! Template rendering boundary.
//!
//! The harness core treats rendering as an external collaborator with a
//! narrow contract: `render(template_path, config) -> text`, deterministic
//! for the same template version and configuration. [`TemplateRenderer`] is
//! the Tera-backed implementation of that contract used by the CLI.

mod renderer;

pub use renderer::TemplateRenderer;
