//! Error types for whisker-renderer.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::EngineError;

/// All errors that can arise from template resolution and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A view model was supplied, but its template name is empty.
    #[error("render: received a view model, but its template name is empty")]
    EmptyTemplate,

    /// The resolver could not map the template name to a file.
    #[error("unable to find template \"{name}\"")]
    TemplateNotFound { name: String },

    /// Filesystem error while reading a resolved template file.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// The template engine rejected the template or its values.
    #[error("template engine error: {0}")]
    Engine(#[from] EngineError),
}
