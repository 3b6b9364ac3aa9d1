//! View-layer types — the variable bag and the view-model contract.
//!
//! A [`Values`] bag is what flows into the templating engine: a string-keyed
//! JSON object map, so anything serde can represent as JSON can be a template
//! variable. A [`ViewModel`] pairs a template name with such a bag; hosts with
//! their own model types implement [`Model`] instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved key inside a [`Values`] bag holding literal template text.
///
/// When present (as a string), the renderer uses the entry's value as the
/// template text instead of resolving the template name, and removes the
/// entry before the bag reaches the engine. The key is reserved either way:
/// it is stripped even when a non-string sits under it.
pub const TEMPLATE_CONTENT_KEY: &str = "template_content_key";

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// The variable bag passed to the templating engine.
///
/// Serializes transparently as a plain JSON object, which is exactly what the
/// engine receives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(pub Map<String, Value>);

impl Values {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a variable. Anything convertible to a JSON value works:
    /// strings, numbers, booleans, `serde_json::Value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a variable, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Whether the bag has an entry under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extract literal template text carried under [`TEMPLATE_CONTENT_KEY`].
    ///
    /// The entry is removed from the bag whenever it exists; only a string
    /// value is returned as template text. Non-string values are dropped so
    /// the reserved key can never leak to the engine.
    pub fn take_template_content(&mut self) -> Option<String> {
        match self.0.remove(TEMPLATE_CONTENT_KEY) {
            Some(Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Values {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Contract for view models: a template name plus the variables to render
/// it with.
pub trait Model {
    /// The template name this model wants rendered.
    fn template(&self) -> &str;

    /// The variable bag to use during rendering.
    fn variables(&self) -> &Values;
}

/// Stock [`Model`] implementation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewModel {
    /// Template name, to be mapped to a file by the resolver.
    pub template: String,
    /// Template variables.
    pub variables: Values,
}

impl ViewModel {
    /// A model for `template` with an empty bag.
    pub fn new(template: impl Into<String>) -> Self {
        ViewModel {
            template: template.into(),
            variables: Values::new(),
        }
    }

    /// A model for `template` rendering `variables`.
    pub fn with_variables(template: impl Into<String>, variables: Values) -> Self {
        ViewModel {
            template: template.into(),
            variables,
        }
    }
}

impl Model for ViewModel {
    fn template(&self) -> &str {
        &self.template
    }

    fn variables(&self) -> &Values {
        &self.variables
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
