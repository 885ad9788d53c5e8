//! Grid layout engine.
//!
//! `GridLayoutEngine::initialize` performs the first layout pass and hands
//! back an engine owning the grid's state: the item list, the viewport
//! width seen by the last pass and, for fluid grids, a debounce timer.
//! The host forwards viewport signals and polls the engine from its event
//! loop; the engine never touches any event system itself.

use crate::box_model::{BoxMetrics, ComputedGeometry};
use crate::config::GridConfig;
use crate::debounce::{DebounceState, Debouncer};
use crate::grid::{compute_geometry, container_height, ChildDescriptor};
use crate::measure::content_width;
use common::{LayoutError, LayoutResult};
use dom::{Display, DomTree, NodeId, Position, SelectorList, Window};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// One item placed by a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub node: NodeId,
    pub descriptor: ChildDescriptor,
    pub geometry: ComputedGeometry,
}

/// Result of one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPass {
    /// Container content width the pass measured.
    pub container_width: f32,
    pub metrics: BoxMetrics,
    pub placements: Vec<Placement>,
    /// Items without a usable placement.
    pub skipped: Vec<NodeId>,
    /// `max(row_index + row_span)` over placed items.
    pub max_row_extent: u32,
    pub container_height: f32,
}

impl LayoutPass {
    /// Geometry of every placed item, keyed by node.
    pub fn geometry_by_node(&self) -> HashMap<NodeId, ComputedGeometry> {
        self.placements.iter().map(|p| (p.node, p.geometry)).collect()
    }
}

/// Layout state for one grid container.
pub struct GridLayoutEngine {
    container: NodeId,
    config: GridConfig,
    items: Vec<NodeId>,
    metrics: BoxMetrics,
    last_width: u32,
    debounce: Debouncer,
    listening: bool,
    last_pass: Option<LayoutPass>,
}

impl GridLayoutEngine {
    /// Lay out the items of `container` and return the engine for it.
    ///
    /// Fails with a configuration error, before touching the tree, if the
    /// options are invalid or the container is `position: fixed`. A static
    /// container is made `position: relative`. A container without matching
    /// items is left otherwise untouched and never recomputes.
    pub fn initialize(
        tree: &mut DomTree,
        container: NodeId,
        config: GridConfig,
        window: &Window,
    ) -> LayoutResult<Self> {
        config.validate()?;
        let selector = SelectorList::parse(&config.selector).ok_or_else(|| {
            LayoutError::configuration(format!("unsupported selector: {:?}", config.selector))
        })?;

        let position = tree
            .get_element(container)
            .ok_or_else(|| LayoutError::not_found("grid container is not an element"))?
            .style
            .position();

        match position {
            Position::Fixed => {
                return Err(LayoutError::configuration(
                    "grid container must not use fixed positioning",
                ));
            }
            Position::Static => {
                tree.update_style(container, |s| s.set_position(Position::Relative));
            }
            _ => {}
        }

        let items = tree.query_selector_all_within(container, &selector);
        let metrics = BoxMetrics::compute(&config, content_width(tree, container, window));

        let mut engine = Self {
            container,
            listening: config.fluid && !items.is_empty(),
            config,
            items,
            metrics,
            last_width: window.viewport_width(),
            debounce: Debouncer::default(),
            last_pass: None,
        };

        if engine.items.is_empty() {
            debug!(selector = %engine.config.selector, "grid has no items, nothing to lay out");
            return Ok(engine);
        }

        engine.layout_pass(tree, window);
        Ok(engine)
    }

    /// The grid container this engine lays out.
    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Items selected at initialization, in document order.
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Cell size of the most recent measurement.
    pub fn metrics(&self) -> BoxMetrics {
        self.metrics
    }

    /// Viewport width recorded by the last pass.
    pub fn last_width(&self) -> u32 {
        self.last_width
    }

    pub fn last_pass(&self) -> Option<&LayoutPass> {
        self.last_pass.as_ref()
    }

    /// Whether viewport signals are acted on.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn state(&self) -> DebounceState {
        self.debounce.state()
    }

    /// When the pending recompute becomes due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Window resize signal.
    pub fn notify_viewport_changed(&mut self, now: Instant) {
        self.arm(now, "resize");
    }

    /// Orientation media query change signal.
    pub fn notify_orientation_changed(&mut self, now: Instant) {
        self.arm(now, "orientation");
    }

    fn arm(&mut self, now: Instant, signal: &'static str) {
        if !self.listening {
            return;
        }
        trace!(signal, "viewport signal, restarting debounce");
        self.debounce.trigger(now);
    }

    /// Run a pending recompute once its quiet period has elapsed.
    ///
    /// Returns whether item geometry was re-applied.
    pub fn poll(&mut self, tree: &mut DomTree, window: &Window, now: Instant) -> LayoutResult<bool> {
        if !self.debounce.fire(now) {
            return Ok(false);
        }
        self.recompute(tree, window)
    }

    /// Re-measure and re-apply geometry if the viewport width changed since
    /// the last pass. Height-only changes are ignored.
    pub fn recompute(&mut self, tree: &mut DomTree, window: &Window) -> LayoutResult<bool> {
        let viewport_width = window.viewport_width();
        if viewport_width == self.last_width {
            trace!(viewport_width, "viewport width unchanged, skipping recompute");
            return Ok(false);
        }
        if self.items.is_empty() {
            return Ok(false);
        }
        if tree.get_element(self.container).is_none() {
            return Err(LayoutError::not_found("grid container was removed"));
        }

        debug!(from = self.last_width, to = viewport_width, "recomputing grid");
        self.layout_pass(tree, window);
        Ok(true)
    }

    /// Measure, place every item and size the container.
    fn layout_pass(&mut self, tree: &mut DomTree, window: &Window) {
        let container_width = content_width(tree, self.container, window);
        self.metrics = BoxMetrics::compute(&self.config, container_width);

        let mut pass = LayoutPass {
            container_width,
            metrics: self.metrics,
            ..LayoutPass::default()
        };

        for &node in &self.items {
            let Some(elem) = tree.get_element(node) else {
                pass.skipped.push(node);
                continue;
            };

            let descriptor = match ChildDescriptor::from_element(elem) {
                Ok(d) => d,
                Err(issue) => {
                    warn!(?node, %issue, "skipping grid item");
                    pass.skipped.push(node);
                    continue;
                }
            };

            let geometry = compute_geometry(&self.config, &self.metrics, &descriptor);
            trace!(?node, ?descriptor, ?geometry, "placing grid item");
            apply_geometry(tree, node, &geometry);

            pass.max_row_extent = pass.max_row_extent.max(descriptor.row_extent());
            pass.placements.push(Placement {
                node,
                descriptor,
                geometry,
            });
        }

        pass.container_height = container_height(&self.config, &self.metrics, pass.max_row_extent);
        tree.update_style(self.container, |s| s.set_px("height", pass.container_height));

        debug!(
            container_width,
            box_width = self.metrics.box_width,
            box_height = self.metrics.box_height,
            placed = pass.placements.len(),
            skipped = pass.skipped.len(),
            height = pass.container_height,
            "grid layout pass"
        );

        self.last_width = window.viewport_width();
        self.last_pass = Some(pass);
    }
}

fn apply_geometry(tree: &mut DomTree, node: NodeId, geometry: &ComputedGeometry) {
    tree.update_style(node, |s| {
        s.set_position(Position::Absolute);
        s.set_display(Display::Block);
        s.set_px("width", geometry.width);
        s.set_px("height", geometry.height);
        s.set_px("left", geometry.left);
        s.set_px("top", geometry.top);
    });
}
