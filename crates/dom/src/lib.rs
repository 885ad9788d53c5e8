//! Minimal DOM (Document Object Model) for hosting grid layouts.
//!
//! This crate provides the node tree, element attributes, inline style and
//! window state the layout engine reads from and writes to.

pub mod node;
pub mod element;
pub mod tree;
pub mod attributes;
pub mod style;
pub mod selector;
pub mod window;

pub use node::{Node, NodeId, NodeType, NodeData};
pub use element::{ElementData, TagName};
pub use tree::DomTree;
pub use attributes::{AttributeMap, DataAttributes};
pub use style::{Display, InlineStyle, Position};
pub use selector::{SelectorList, SimpleSelector};
pub use window::{Orientation, Window};
