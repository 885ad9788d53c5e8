//! Content width measurement for grid containers.

use common::{Length, LengthContext};
use dom::{DomTree, NodeId, Window};

/// Content width of `node` in pixels.
///
/// The document measures as the viewport width. An element resolves its
/// inline `width` against its parent's measured width; without one (or with
/// `auto`) it fills its parent, like a block box.
pub fn content_width(tree: &DomTree, node: NodeId, window: &Window) -> f32 {
    // Walk up to the document, then resolve widths back down.
    let mut chain = vec![node];
    let mut current = node;
    while let Some(parent) = tree.parent(current) {
        chain.push(parent);
        current = parent;
    }

    let viewport_width = window.viewport_width() as f32;
    let viewport_height = window.inner_height as f32;
    let mut width = viewport_width;

    for &id in chain.iter().rev() {
        let Some(elem) = tree.get_element(id) else {
            // Document or detached non-element root
            width = viewport_width;
            continue;
        };
        let length = elem.style.length("width").unwrap_or(Length::Auto);
        let context = LengthContext::new(width, viewport_width, viewport_height);
        width = length.to_px(&context).max(0.0);
    }

    width
}
