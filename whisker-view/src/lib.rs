//! Whisker view contracts — template values, view models, resolvers.
//!
//! Public API surface:
//! - [`types`] — [`Values`], the [`Model`] contract, [`ViewModel`]
//! - [`resolver`] — the [`Resolver`] contract, [`TemplateMap`], [`PathStack`]

pub mod resolver;
pub mod types;

pub use resolver::{PathStack, Resolver, TemplateMap, DEFAULT_SUFFIX};
pub use types::{Model, Values, ViewModel, TEMPLATE_CONTENT_KEY};
