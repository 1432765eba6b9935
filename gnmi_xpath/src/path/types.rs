//! Structured path model
//!
//! `Path` and `PathElement` are read-only once built. Serialization uses the
//! gNMI field names (`origin`, `elem`, `name`, `key`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named step of a path, optionally narrowed by equality keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    name: String,
    #[serde(rename = "key", default, skip_serializing_if = "IndexMap::is_empty")]
    keys: IndexMap<String, String>,
}

impl PathElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: IndexMap::new(),
        }
    }

    /// Add a key while constructing an expected element
    pub fn with_key(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keys.insert(key.into(), value.into());
        self
    }

    pub(crate) fn from_parts(name: String, keys: IndexMap<String, String>) -> Self {
        Self { name, keys }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keys in insertion order
    pub fn keys(&self) -> &IndexMap<String, String> {
        &self.keys
    }

    pub fn key(&self, name: &str) -> Option<&str> {
        self.keys.get(name).map(String::as_str)
    }

    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }

    fn write_xpath(&self, out: &mut String) {
        out.push_str(&self.name);
        for (key, value) in &self.keys {
            out.push('[');
            out.push_str(key);
            out.push('=');
            out.push_str(&quote_value(value));
            out.push(']');
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_xpath(&mut out);
        f.write_str(&out)
    }
}

/// Parsed path: an optional origin plus ordered elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
    #[serde(rename = "elem", default)]
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new(origin: Option<String>, elements: Vec<PathElement>) -> Self {
        Self { origin, elements }
    }

    pub(crate) fn with_origin(mut self, origin: Option<String>) -> Self {
        self.origin = origin;
        self
    }

    pub(crate) fn first_element_mut(&mut self) -> Option<&mut PathElement> {
        self.elements.first_mut()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&PathElement> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(PathElement::name)
    }

    /// Render back to expression text, without the origin.
    ///
    /// Values that would not survive re-tokenizing unquoted are quoted. A
    /// value holding both quote characters may not survive re-parsing.
    pub fn to_xpath(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            out.push('/');
            element.write_xpath(&mut out);
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xpath())
    }
}

fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, '[' | ']' | '=' | '<' | '>' | '\'' | '"'));

    if !needs_quotes {
        value.to_string()
    } else if value.contains('\'') {
        format!("\"{}\"", value)
    } else {
        format!("'{}'", value)
    }
}
