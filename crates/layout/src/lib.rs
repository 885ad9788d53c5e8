//! Fixed-placement grid layout.
//!
//! Places the items of a container on a column grid from their `data-rows`,
//! `data-cols`, `data-x` and `data-y` attributes, writing absolute geometry
//! into inline style, and keeps fluid grids in step with the viewport width.

pub mod config;
pub mod box_model;
pub mod grid;
pub mod measure;
pub mod debounce;
pub mod engine;

pub use config::GridConfig;
pub use box_model::{BoxMetrics, ComputedGeometry};
pub use grid::{compute_geometry, container_height, ChildDescriptor, DescriptorIssue};
pub use debounce::{DebounceState, Debouncer, RESIZE_DEBOUNCE};
pub use engine::{GridLayoutEngine, LayoutPass, Placement};
