//! DOM Attribute handling.

use indexmap::IndexMap;
use std::str::FromStr;
use std::sync::Arc;

/// Map of element attributes preserving insertion order.
#[derive(Clone, Debug, Default)]
pub struct AttributeMap {
    attrs: IndexMap<Arc<str>, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self {
            attrs: IndexMap::new(),
        }
    }

    /// Set an attribute value.
    pub fn set(&mut self, name: &str, value: &str) {
        self.attrs.insert(Arc::from(name), value.to_string());
    }

    /// Get an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    /// Remove an attribute.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.attrs.shift_remove(name)
    }

    /// Check if attribute exists.
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate over attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }
}

/// View over the `data-*` attributes of an element.
pub struct DataAttributes<'a> {
    attrs: &'a AttributeMap,
}

impl<'a> DataAttributes<'a> {
    pub fn new(attrs: &'a AttributeMap) -> Self {
        Self { attrs }
    }

    /// Get a data attribute value.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let attrs = self.attrs;
        let key = format!("data-{}", name.to_ascii_lowercase());
        attrs.get(&key)
    }

    /// Get a data attribute parsed as a number.
    ///
    /// Returns `None` when the attribute is missing or is not a number.
    pub fn get_number<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.trim().parse::<T>().ok())
    }

    /// Iterate over data attributes with the `data-` prefix stripped.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        let attrs = self.attrs;
        attrs
            .iter()
            .filter(|(k, _)| k.starts_with("data-"))
            .map(|(k, v)| (&k[5..], v))
    }
}
