//! Template resolution — mapping a template name to the file that holds it.
//!
//! The renderer never builds its own paths; it asks an injected [`Resolver`].
//! Two stock strategies are provided:
//!
//! - [`TemplateMap`] — explicit name → path lookup, no filesystem probing.
//! - [`PathStack`] — ordered template directories, probed most-recently-added
//!   first, with default-suffix completion for extensionless names.
//!
//! Resolution only locates the file; reading its content is the renderer's
//! job.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps a template name to a resource the renderer may consume.
pub trait Resolver {
    /// The file holding the named template, or `None` when the name cannot
    /// be mapped.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

// ---------------------------------------------------------------------------
// TemplateMap
// ---------------------------------------------------------------------------

/// Resolver backed by an explicit name → path map.
///
/// A pure lookup: the mapped path is returned as-is, without checking that
/// the file exists. Missing files surface later as read errors, which keeps
/// the map usable for templates created after registration.
#[derive(Debug, Clone, Default)]
pub struct TemplateMap {
    map: HashMap<String, PathBuf>,
}

impl TemplateMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the path for `name`.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.map.insert(name.into(), path.into());
    }

    /// Whether `name` has a registered path.
    pub fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Resolver for TemplateMap {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.map.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for TemplateMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// PathStack
// ---------------------------------------------------------------------------

/// Default filename suffix appended to extensionless template names.
pub const DEFAULT_SUFFIX: &str = "mustache";

/// Resolver probing a stack of template directories.
///
/// Directories added later shadow earlier ones. A name without an extension
/// gets the default suffix appended before probing, so `"home"` looks for
/// `home.mustache` while `"home.phtml"` is probed verbatim. Names containing
/// a parent-directory segment (`..`) never resolve.
#[derive(Debug, Clone)]
pub struct PathStack {
    paths: Vec<PathBuf>,
    default_suffix: String,
}

impl PathStack {
    /// An empty stack with the [`DEFAULT_SUFFIX`].
    pub fn new() -> Self {
        PathStack {
            paths: Vec::new(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// A stack over `paths`, in the order given (the last entry is probed
    /// first).
    pub fn with_paths(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        PathStack {
            paths: paths.into_iter().map(Into::into).collect(),
            default_suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Push a template directory onto the stack; it shadows all directories
    /// added before it.
    pub fn add_path(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// The directories on the stack, oldest first.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// The suffix appended to extensionless names.
    pub fn default_suffix(&self) -> &str {
        &self.default_suffix
    }

    pub fn set_default_suffix(&mut self, suffix: impl Into<String>) {
        self.default_suffix = suffix.into();
    }

    /// `name` with the default suffix appended when it carries no extension.
    fn filename(&self, name: &str) -> PathBuf {
        if Path::new(name).extension().is_some() {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{name}.{}", self.default_suffix))
        }
    }
}

impl Default for PathStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for PathStack {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        // LFI guard: refuse names that try to climb out of the stack.
        if name.split(['/', '\\']).any(|segment| segment == "..") {
            return None;
        }

        let filename = self.filename(name);
        self.paths
            .iter()
            .rev()
            .map(|dir| dir.join(&filename))
            .find(|candidate| candidate.is_file())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
