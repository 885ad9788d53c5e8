//! Scene files.

use anyhow::{Context, Result};
use dom::{DomTree, ElementData, NodeId, TagName, Window};
use layout::GridConfig;
use serde::Deserialize;
use std::path::Path;

/// A grid container, its items and a sequence of viewport sizes.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default)]
    pub viewport: ViewportSpec,
    #[serde(default)]
    pub container: ContainerSpec,
    /// Plugin options; missing keys keep their defaults.
    #[serde(default)]
    pub options: Option<serde_json::Value>,
    pub items: Vec<ItemSpec>,
    /// Viewport sizes applied one after another once the grid is set up.
    #[serde(default)]
    pub resizes: Vec<ViewportSpec>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportSpec {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSpec {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerSpec {
    pub tag: String,
    pub id: Option<String>,
    pub style: String,
}

impl Default for ContainerSpec {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            style: "width: 100%".to_string(),
        }
    }
}

/// One grid item. Placement fields left out are left off the element.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemSpec {
    pub tag: Option<String>,
    pub class: Option<String>,
    pub text: Option<String>,
    pub rows: Option<u32>,
    pub cols: Option<u32>,
    pub x: Option<u32>,
    pub y: Option<u32>,
}

/// DOM built from a scene.
pub struct SceneDom {
    pub tree: DomTree,
    pub container: NodeId,
    /// Item nodes in scene order.
    pub items: Vec<NodeId>,
    pub window: Window,
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Merged grid options.
    pub fn config(&self) -> Result<GridConfig> {
        match &self.options {
            Some(options) => GridConfig::from_value(options.clone()).context("invalid grid options"),
            None => Ok(GridConfig::default()),
        }
    }

    /// Build the document: `document > container > items`.
    pub fn build(&self) -> SceneDom {
        let mut tree = DomTree::new();
        let root = tree.root();

        let mut data = ElementData::new(TagName::new(&self.container.tag));
        if let Some(id) = &self.container.id {
            data.set_attribute("id", id);
        }
        if !self.container.style.trim().is_empty() {
            data.set_attribute("style", &self.container.style);
        }
        let container = tree.create_element(data);
        tree.append_child(root, container);

        let items = self
            .items
            .iter()
            .map(|spec| {
                let item = tree.create_element(spec.element());
                tree.append_child(container, item);
                if let Some(text) = &spec.text {
                    let label = tree.create_text(text.clone());
                    tree.append_child(item, label);
                }
                item
            })
            .collect();

        SceneDom {
            tree,
            container,
            items,
            window: Window::with_size(self.viewport.width, self.viewport.height),
        }
    }
}

impl ItemSpec {
    fn element(&self) -> ElementData {
        let tag = self.tag.as_deref().unwrap_or("div");
        let mut data = ElementData::new(TagName::new(tag));
        if let Some(class) = &self.class {
            data.set_attribute("class", class);
        }
        let placement = [
            ("data-rows", self.rows),
            ("data-cols", self.cols),
            ("data-x", self.x),
            ("data-y", self.y),
        ];
        for (name, value) in placement {
            if let Some(value) = value {
                data.set_attribute(name, &value.to_string());
            }
        }
        data
    }
}
