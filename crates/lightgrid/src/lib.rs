//! Lightgrid - fixed-placement grid layout, driven from scene files.
//!
//! This crate ties the DOM model and the grid layout engine together:
//! - scene files describing a container, its items and viewport changes
//! - replaying those changes through a fluid grid
//! - JSON reports of every layout pass

pub mod scene;
pub mod report;

pub use scene::{Scene, SceneDom};
pub use report::{run_scene, PassReport, SceneReport};

/// Lightgrid version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
