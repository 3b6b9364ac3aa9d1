//! Template engine seam — the [`TemplateEngine`] trait and the default
//! Handlebars-backed [`Mustache`] implementation.

use handlebars::Handlebars;
use thiserror::Error;

use whisker_view::Values;

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// Failure reported by a [`TemplateEngine`] implementation.
///
/// Concrete engines have their own error types; the seam erases them behind
/// a boxed value so callers only depend on the trait.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EngineError(Box<dyn std::error::Error + Send + Sync>);

impl EngineError {
    /// Wrap an engine-specific error (or a plain message).
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> EngineError {
        EngineError(source.into())
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Rendering backend used by [`Renderer`](crate::Renderer).
///
/// Implementations substitute `values` into `template` and return the final
/// output. The renderer hands over template text it has already selected and
/// loaded; engines never touch the filesystem.
pub trait TemplateEngine {
    fn render_str(&self, template: &str, values: &Values) -> Result<String, EngineError>;
}

// ---------------------------------------------------------------------------
// Mustache
// ---------------------------------------------------------------------------

/// Default engine: Mustache-style templates, backed by Handlebars.
///
/// Handlebars accepts Mustache interpolation syntax: `{{name}}` substitutes
/// (HTML-escaped), `{{{name}}}` substitutes raw, and with [`Mustache::new`]
/// a missing value renders as the empty string.
pub struct Mustache {
    handlebars: Handlebars<'static>,
}

impl Mustache {
    /// Lenient engine: unknown variables render as empty strings.
    pub fn new() -> Mustache {
        Mustache { handlebars: Handlebars::new() }
    }

    /// Strict engine: referencing a missing value fails the render.
    pub fn strict() -> Mustache {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        Mustache { handlebars }
    }
}

impl Default for Mustache {
    fn default() -> Self {
        Mustache::new()
    }
}

impl TemplateEngine for Mustache {
    fn render_str(&self, template: &str, values: &Values) -> Result<String, EngineError> {
        self.handlebars
            .render_template(template, values)
            .map_err(EngineError::new)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
