//! DOM Element implementation.

use crate::attributes::{AttributeMap, DataAttributes};
use crate::style::InlineStyle;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

/// Tag names interned for cheap cloning and comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagName(Arc<str>);

impl TagName {
    pub fn new(name: &str) -> Self {
        static INTERNED: Lazy<RwLock<HashMap<String, Arc<str>>>> =
            Lazy::new(|| RwLock::new(HashMap::new()));

        let lower = name.to_ascii_lowercase();

        {
            let cache = INTERNED.read();
            if let Some(s) = cache.get(&lower) {
                return TagName(s.clone());
            }
        }

        let mut cache = INTERNED.write();
        let s = cache
            .entry(lower.clone())
            .or_insert_with(|| Arc::from(lower.as_str()))
            .clone();
        TagName(s)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn div() -> Self {
        Self::new("div")
    }
    pub fn span() -> Self {
        Self::new("span")
    }
}

impl std::fmt::Display for TagName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == other.to_ascii_lowercase()
    }
}

/// Element-specific data.
#[derive(Clone, Debug)]
pub struct ElementData {
    /// Tag name (lowercase).
    pub tag_name: TagName,
    /// Attributes, including the serialized `style` attribute.
    pub attributes: AttributeMap,
    /// ID attribute (cached).
    pub id: Option<Arc<str>>,
    /// Class list (cached).
    pub class_list: SmallVec<[Arc<str>; 4]>,
    /// Inline style (parsed from the `style` attribute).
    pub style: InlineStyle,
}

impl ElementData {
    pub fn new(tag_name: TagName) -> Self {
        Self {
            tag_name,
            attributes: AttributeMap::new(),
            id: None,
            class_list: SmallVec::new(),
            style: InlineStyle::new(),
        }
    }

    /// Set an attribute, updating cached values.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let name_lower = name.to_ascii_lowercase();

        match name_lower.as_str() {
            "id" => {
                self.id = Some(Arc::from(value));
            }
            "class" => {
                self.class_list = value.split_whitespace().map(Arc::from).collect();
            }
            "style" => {
                self.style = InlineStyle::parse(value);
            }
            _ => {}
        }

        self.attributes.set(&name_lower, value);
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name: &str) {
        let name_lower = name.to_ascii_lowercase();

        match name_lower.as_str() {
            "id" => self.id = None,
            "class" => self.class_list.clear(),
            "style" => self.style = InlineStyle::new(),
            _ => {}
        }

        self.attributes.remove(&name_lower);
    }

    #[inline]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(&name.to_ascii_lowercase())
    }

    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(&name.to_ascii_lowercase())
    }

    /// `data-*` attribute view.
    pub fn dataset(&self) -> DataAttributes<'_> {
        DataAttributes::new(&self.attributes)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|c| c.as_ref() == class)
    }

    /// Mutate the inline style and re-serialize the `style` attribute.
    pub fn update_style<F: FnOnce(&mut InlineStyle)>(&mut self, f: F) {
        f(&mut self.style);
        if self.style.is_empty() {
            self.attributes.remove("style");
        } else {
            let css = self.style.to_string();
            self.attributes.set("style", &css);
        }
    }
}
