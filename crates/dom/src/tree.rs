//! DOM Tree implementation.

use crate::element::ElementData;
use crate::node::{Node, NodeData, NodeId};
use crate::selector::SelectorList;
use crate::style::InlineStyle;
use slotmap::SlotMap;
use std::collections::HashMap;

/// The DOM tree structure.
pub struct DomTree {
    /// All nodes in the tree.
    nodes: SlotMap<NodeId, Node>,
    /// Root node (document).
    root: NodeId,
    /// ID to node mapping for fast lookups.
    id_map: HashMap<String, NodeId>,
}

impl DomTree {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert_with_key(Node::new_document);
        Self {
            nodes,
            root,
            id_map: HashMap::new(),
        }
    }

    /// Get the root document node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get element data for a node.
    pub fn get_element(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(id).and_then(|n| n.as_element())
    }

    /// Get mutable element data for a node.
    pub fn get_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id).and_then(|n| n.as_element_mut())
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.nodes.insert_with_key(|id| Node::new_element(id, data))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, content: String) -> NodeId {
        self.nodes.insert_with_key(|id| Node::new_text(id, content))
    }

    /// Append a child to a parent node, detaching it from any old parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        self.remove_from_parent(child);

        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        self.update_id_map(child);
    }

    /// Remove a node from its parent.
    pub fn remove_from_parent(&mut self, node: NodeId) {
        let parent = match self.nodes.get_mut(node) {
            Some(n) => n.parent.take(),
            None => return,
        };

        if let Some(parent_node) = parent.and_then(|p| self.nodes.get_mut(p)) {
            parent_node.children.retain(|id| *id != node);
        }
    }

    /// Remove a node and its subtree from the tree.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.remove_from_parent(node);

        let mut to_remove = vec![node];
        let mut i = 0;
        while i < to_remove.len() {
            if let Some(n) = self.nodes.get(to_remove[i]) {
                to_remove.extend(n.children.iter().copied());
            }
            i += 1;
        }

        for id in to_remove {
            if let Some(removed) = self.nodes.remove(id) {
                if let Some(elem_id) = removed.as_element().and_then(|e| e.id.as_ref()) {
                    if self.id_map.get(elem_id.as_ref()) == Some(&id) {
                        self.id_map.remove(elem_id.as_ref());
                    }
                }
            }
        }
    }

    /// Get parent node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    /// Get all children.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .get(node)
            .into_iter()
            .flat_map(|n| n.children.iter().copied())
    }

    /// Get descendants (pre-order, document order).
    pub fn descendants(&self, node: NodeId) -> DescendantIterator<'_> {
        let mut stack = Vec::new();
        if let Some(n) = self.nodes.get(node) {
            stack.extend(n.children.iter().rev().copied());
        }
        DescendantIterator { tree: self, stack }
    }

    /// Find element by ID.
    pub fn find_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.id_map.get(id).copied()
    }

    /// Elements below `scope` matching `selector`, in document order.
    pub fn query_selector_all_within(&self, scope: NodeId, selector: &SelectorList) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|&id| {
                self.get_element(id)
                    .map(|e| selector.matches(e))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Mutate an element's inline style. Returns `false` if `node` is not an
    /// element.
    pub fn update_style<F: FnOnce(&mut InlineStyle)>(&mut self, node: NodeId, f: F) -> bool {
        match self.get_element_mut(node) {
            Some(elem) => {
                elem.update_style(f);
                true
            }
            None => false,
        }
    }

    /// Get text content of a node and its descendants.
    pub fn get_text_content(&self, node: NodeId) -> String {
        let mut result = String::new();
        if let Some(text) = self.nodes.get(node).and_then(|n| n.as_text()) {
            result.push_str(text);
        }
        for id in self.descendants(node) {
            if let Some(text) = self.nodes.get(id).and_then(|n| n.as_text()) {
                result.push_str(text);
            }
        }
        result
    }

    fn update_id_map(&mut self, node: NodeId) {
        let ids: Vec<(String, NodeId)> = std::iter::once(node)
            .chain(self.descendants(node))
            .filter_map(|id| {
                let elem_id = self.get_element(id)?.id.as_ref()?;
                Some((elem_id.to_string(), id))
            })
            .collect();
        self.id_map.extend(ids);
    }

    /// Get total number of nodes, including the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (only root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over descendant nodes (pre-order traversal).
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DescendantIterator<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;

        if let Some(node) = self.tree.nodes.get(current) {
            self.stack.extend(node.children.iter().rev().copied());
        }

        Some(current)
    }
}
