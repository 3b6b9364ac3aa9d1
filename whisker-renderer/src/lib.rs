//! # whisker-renderer
//!
//! Mustache-style view rendering. A [`Renderer`] picks the template text
//! (configured override, literal text carried in the value bag, or a
//! resolver-mapped file) and hands it to a pluggable [`TemplateEngine`].
//!
//! ## Usage
//!
//! ```rust
//! use whisker_renderer::Renderer;
//! use whisker_view::{TemplateMap, Values};
//!
//! let mut renderer = Renderer::new(TemplateMap::new());
//! renderer.set_template_content("Hello, {{name}}!");
//!
//! let mut values = Values::new();
//! values.set("name", "whisker");
//!
//! let out = renderer.render("ignored", values).expect("literal render");
//! assert_eq!(out, "Hello, whisker!");
//! ```

pub mod engine;
pub mod error;
pub mod renderer;

pub use engine::{EngineError, Mustache, TemplateEngine};
pub use error::RenderError;
pub use renderer::{Renderer, TemplateSource};
