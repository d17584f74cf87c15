//! # Template Engine
//!
//! Renders a [`TemplateContext`] through minijinja. Every render builds a fresh
//! environment holding only the given template and helpers. Undefined bindings are errors.

use crate::error::{AppError, AppResult};
use crate::render::context::TemplateContext;
use crate::render::helpers::TemplateHelpers;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::path::Path;

/// Name of the bundled handler template.
pub const DEFAULT_TEMPLATE_NAME: &str = "handler.rs.jinja";

/// The bundled handler template.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/handler.rs.jinja");

/// Template text plus the name reported in errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Name used in diagnostics.
    pub name: String,
    /// Template body.
    pub text: String,
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self::bundled()
    }
}

impl TemplateSource {
    /// The bundled default template.
    pub fn bundled() -> Self {
        Self::custom(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE)
    }

    /// Caller-supplied template text.
    pub fn custom(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads a template from disk, named after its file name.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::custom(name, text))
    }
}

/// Renders `ctx` through `source` with `helpers` installed.
pub fn render(
    source: &TemplateSource,
    ctx: &TemplateContext,
    helpers: &TemplateHelpers,
) -> AppResult<String> {
    let to_error = |e: minijinja::Error| AppError::TemplateRender {
        template: source.name.clone(),
        message: e.to_string(),
    };

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    helpers.install(&mut env);

    let template = env
        .template_from_named_str(&source.name, &source.text)
        .map_err(to_error)?;
    template.render(ctx).map_err(to_error)
}
