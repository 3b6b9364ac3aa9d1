//! Mustache view renderer — template selection, resolution, and rendering.

use std::path::PathBuf;

use whisker_view::{Model, Resolver, Values, DEFAULT_SUFFIX};

use crate::engine::{Mustache, TemplateEngine};
use crate::error::RenderError;

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

// ---------------------------------------------------------------------------
// TemplateSource
// ---------------------------------------------------------------------------

/// Where the template text for a render comes from.
///
/// The reserved [`TEMPLATE_CONTENT_KEY`](whisker_view::TEMPLATE_CONTENT_KEY)
/// entry is extracted exactly once, when a source is built from a name or a
/// model; the rest of the pipeline never sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// Render the file the resolver maps `name` to.
    Named { name: String, values: Values },
    /// Render `text` itself; no resolution, no file access.
    Literal { text: String, values: Values },
}

impl TemplateSource {
    /// Build a source from a template name and a value bag.
    ///
    /// If the bag carries the reserved content key, that entry becomes the
    /// template text and is removed from the bag; the name is then ignored.
    pub fn from_name(name: impl Into<String>, mut values: Values) -> TemplateSource {
        match values.take_template_content() {
            Some(text) => TemplateSource::Literal { text, values },
            None => TemplateSource::Named { name: name.into(), values },
        }
    }

    /// Build a source from a view model.
    ///
    /// A model that names no template cannot be rendered, so an empty
    /// template name fails with [`RenderError::EmptyTemplate`] before any
    /// source selection happens.
    pub fn from_model(model: &impl Model) -> Result<TemplateSource, RenderError> {
        if model.template().is_empty() {
            return Err(RenderError::EmptyTemplate);
        }
        Ok(TemplateSource::from_name(model.template(), model.variables().clone()))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// View renderer over a pluggable [`Resolver`] and [`TemplateEngine`].
///
/// Template text is chosen with a fixed precedence: the configured content
/// override first, then literal text carried in the value bag, then the file
/// the resolver maps the name to. The engine only ever receives the final
/// text and the cleaned value bag.
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
    resolver: Box<dyn Resolver>,
    suffix: String,
    suffix_locked: bool,
    template_content: Option<String>,
}

impl Renderer {
    /// Construct a renderer with the default [`Mustache`] engine.
    pub fn new(resolver: impl Resolver + 'static) -> Renderer {
        Renderer::with_engine(Mustache::new(), resolver)
    }

    /// Construct a renderer with a caller-supplied engine.
    pub fn with_engine(
        engine: impl TemplateEngine + 'static,
        resolver: impl Resolver + 'static,
    ) -> Renderer {
        Renderer {
            engine: Box::new(engine),
            resolver: Box::new(resolver),
            suffix: DEFAULT_SUFFIX.to_string(),
            suffix_locked: false,
            template_content: None,
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Render the template `name` maps to, substituting `values`.
    pub fn render(&self, name: &str, values: Values) -> Result<String, RenderError> {
        self.render_source(TemplateSource::from_name(name, values))
    }

    /// Render a view model: its template name selects the template, its
    /// variables feed the engine.
    pub fn render_model(&self, model: &impl Model) -> Result<String, RenderError> {
        self.render_source(TemplateSource::from_model(model)?)
    }

    /// Render an explicit [`TemplateSource`].
    pub fn render_source(&self, source: TemplateSource) -> Result<String, RenderError> {
        let (template, values) = self.template_text(source)?;
        Ok(self.engine.render_str(&template, &values)?)
    }

    /// Pick the template text for `source`, honouring the content override.
    fn template_text(&self, source: TemplateSource) -> Result<(String, Values), RenderError> {
        if let Some(text) = &self.template_content {
            tracing::debug!("rendering from the configured content override");
            let values = match source {
                TemplateSource::Named { values, .. }
                | TemplateSource::Literal { values, .. } => values,
            };
            return Ok((text.clone(), values));
        }
        match source {
            TemplateSource::Literal { text, values } => Ok((text, values)),
            TemplateSource::Named { name, values } => {
                let text = self.load_template(&name)?;
                Ok((text, values))
            }
        }
    }

    /// Resolve `name` to a file and read it in full.
    fn load_template(&self, name: &str) -> Result<String, RenderError> {
        let path = self
            .resolver
            .resolve(name)
            .ok_or_else(|| RenderError::TemplateNotFound { name: name.to_string() })?;
        tracing::debug!("resolved template {} to {}", name, path.display());
        std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))
    }

    // -----------------------------------------------------------------------
    // Capability check
    // -----------------------------------------------------------------------

    /// Whether this renderer claims the template `name` maps to.
    ///
    /// With the suffix lock off, the renderer claims everything. With the
    /// lock on, the name must resolve and the resolved file's extension must
    /// equal the configured suffix exactly (case-sensitive).
    pub fn can_render(&self, name: &str) -> bool {
        if !self.suffix_locked {
            return true;
        }
        match self.resolver.resolve(name) {
            Some(path) => path.extension().and_then(|ext| ext.to_str()) == Some(self.suffix.as_str()),
            None => false,
        }
    }

    /// [`can_render`](Renderer::can_render) for a view model's template name.
    pub fn can_render_model(&self, model: &impl Model) -> bool {
        self.can_render(model.template())
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    pub fn engine(&self) -> &dyn TemplateEngine {
        self.engine.as_ref()
    }

    pub fn set_engine(&mut self, engine: impl TemplateEngine + 'static) {
        self.engine = Box::new(engine);
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn set_resolver(&mut self, resolver: impl Resolver + 'static) {
        self.resolver = Box::new(resolver);
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Set the file extension the suffix lock compares against.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    pub fn suffix_locked(&self) -> bool {
        self.suffix_locked
    }

    pub fn set_suffix_locked(&mut self, locked: bool) {
        self.suffix_locked = locked;
    }

    pub fn template_content(&self) -> Option<&str> {
        self.template_content.as_deref()
    }

    /// Set literal template text that overrides name resolution on every
    /// render until [`clear_template_content`](Renderer::clear_template_content)
    /// is called.
    pub fn set_template_content(&mut self, content: impl Into<String>) {
        self.template_content = Some(content.into());
    }

    pub fn clear_template_content(&mut self) {
        self.template_content = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
