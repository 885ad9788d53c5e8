//! Replaying a scene through the grid engine.

use crate::scene::{Scene, SceneDom};
use anyhow::{Context, Result};
use layout::{BoxMetrics, ComputedGeometry, GridLayoutEngine, LayoutPass, RESIZE_DEBOUNCE};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::info;

/// Gap between a viewport change and the next one in a replay.
const SETTLE: Duration = Duration::from_millis(100);

/// Geometry of one scene item after a pass.
#[derive(Clone, Debug, Serialize)]
pub struct ItemReport {
    pub index: usize,
    /// `None` when the item has no usable placement.
    pub geometry: Option<ComputedGeometry>,
}

/// State after setup or after one viewport change.
#[derive(Clone, Debug, Serialize)]
pub struct PassReport {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Whether the grid was laid out by this step.
    pub laid_out: bool,
    pub container_width: f32,
    pub metrics: BoxMetrics,
    pub container_height: f32,
    pub items: Vec<ItemReport>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SceneReport {
    pub passes: Vec<PassReport>,
}

/// Set up the grid, then apply each resize and let the debounce settle.
pub fn run_scene(scene: &Scene) -> Result<SceneReport> {
    let config = scene.config()?;
    let SceneDom {
        mut tree,
        container,
        items,
        mut window,
    } = scene.build();

    let mut engine = GridLayoutEngine::initialize(&mut tree, container, config, &window)
        .context("failed to initialize grid")?;
    info!(items = items.len(), fluid = engine.is_listening(), "grid initialized");

    let mut passes = vec![report(&engine, &items, &window, engine.last_pass().is_some())];

    let mut now = Instant::now();
    for resize in &scene.resizes {
        let was_portrait = window.match_media("(orientation: portrait)").matches;
        window.resize_to(resize.width, resize.height);

        engine.notify_viewport_changed(now);
        if window.match_media("(orientation: portrait)").matches != was_portrait {
            engine.notify_orientation_changed(now);
        }

        now += RESIZE_DEBOUNCE;
        let laid_out = engine
            .poll(&mut tree, &window, now)
            .context("failed to recompute grid")?;
        info!(width = resize.width, height = resize.height, laid_out, "viewport changed");

        passes.push(report(&engine, &items, &window, laid_out));
        now += SETTLE;
    }

    Ok(SceneReport { passes })
}

fn report(
    engine: &GridLayoutEngine,
    items: &[dom::NodeId],
    window: &dom::Window,
    laid_out: bool,
) -> PassReport {
    let empty = LayoutPass::default();
    let pass = engine.last_pass().unwrap_or(&empty);
    let placed = pass.geometry_by_node();

    PassReport {
        viewport_width: window.viewport_width(),
        viewport_height: window.inner_height,
        laid_out,
        container_width: pass.container_width,
        metrics: engine.metrics(),
        container_height: pass.container_height,
        items: items
            .iter()
            .enumerate()
            .map(|(index, &node)| ItemReport {
                index,
                geometry: placed.get(&node).copied(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(report: &PassReport, index: usize) -> (f32, f32, f32, f32) {
        let g = report.items[index].geometry.unwrap();
        (g.width, g.height, g.left, g.top)
    }

    #[test]
    fn test_example_scene() {
        let scene = Scene::from_json(
            r#"{
                "container": { "style": "width: 400px" },
                "options": { "cols": 4 },
                "items": [
                    { "rows": 1, "cols": 1, "x": 0, "y": 0 },
                    { "rows": 1, "cols": 2, "x": 0, "y": 1 },
                    { "rows": 2, "cols": 1, "x": 0, "y": 3 },
                    { "rows": 1, "cols": 3, "x": 1, "y": 0 }
                ]
            }"#,
        )
        .unwrap();

        let report = run_scene(&scene).unwrap();
        assert_eq!(report.passes.len(), 1);
        let pass = &report.passes[0];
        assert!(pass.laid_out);
        assert_eq!(pass.metrics.box_width, 85.0);
        assert_eq!(pass.container_height, 210.0);
        assert_eq!(geometry(pass, 2), (85.0, 190.0, 315.0, 0.0));
        assert_eq!(geometry(pass, 3), (295.0, 85.0, 0.0, 105.0));
    }

    #[test]
    fn test_fluid_replay() {
        let scene = Scene::from_json(
            r#"{
                "viewport": { "width": 400, "height": 800 },
                "options": { "cols": 4, "fluid": true },
                "items": [
                    { "rows": 1, "cols": 1, "x": 0, "y": 0 },
                    { "rows": 1, "cols": 1, "x": 0, "y": 1 }
                ],
                "resizes": [
                    { "width": 400, "height": 600 },
                    { "width": 800, "height": 600 }
                ]
            }"#,
        )
        .unwrap();

        let report = run_scene(&scene).unwrap();
        assert_eq!(report.passes.len(), 3);

        // Height-only change
        assert!(!report.passes[1].laid_out);
        assert_eq!(report.passes[1].metrics.box_width, 85.0);

        let wide = &report.passes[2];
        assert!(wide.laid_out);
        assert_eq!(wide.container_width, 800.0);
        assert_eq!(wide.metrics.box_width, 185.0);
        assert_eq!(geometry(wide, 1), (185.0, 185.0, 205.0, 0.0));
        assert_eq!(wide.container_height, 205.0);
    }

    #[test]
    fn test_unplaced_item_reported() {
        let scene = Scene::from_json(
            r#"{ "items": [ { "rows": 1, "cols": 1, "x": 0 }, { "rows": 1, "cols": 1, "x": 0, "y": 0 } ] }"#,
        )
        .unwrap();
        let report = run_scene(&scene).unwrap();
        assert!(report.passes[0].items[0].geometry.is_none());
        assert!(report.passes[0].items[1].geometry.is_some());
    }

    #[test]
    fn test_items_keep_scene_order() {
        let items: Vec<String> = (0..64)
            .map(|i| match i {
                10 => r#"{ "rows": 0, "cols": 1, "x": 0, "y": 0 }"#.to_string(),
                _ => format!(r#"{{ "rows": 1, "cols": 1, "x": {}, "y": {} }}"#, i / 4, i % 4),
            })
            .collect();
        let scene = Scene::from_json(&format!(
            r#"{{ "container": {{ "style": "width: 400px" }}, "options": {{ "cols": 4 }}, "items": [{}] }}"#,
            items.join(",")
        ))
        .unwrap();

        let pass = &run_scene(&scene).unwrap().passes[0];
        assert_eq!(pass.items.len(), 64);
        for (i, item) in pass.items.iter().enumerate() {
            assert_eq!(item.index, i);
            if i == 10 {
                assert!(item.geometry.is_none());
                continue;
            }
            let (_, _, left, top) = geometry(pass, i);
            assert_eq!((left, top), ((i % 4) as f32 * 105.0, (i / 4) as f32 * 105.0));
        }
        assert_eq!(pass.container_height, 16.0 * 105.0);
    }

    #[test]
    fn test_fixed_container_fails() {
        let scene = Scene::from_json(
            r#"{ "container": { "style": "position: fixed" }, "items": [ { "rows": 1, "cols": 1, "x": 0, "y": 0 } ] }"#,
        )
        .unwrap();
        let err = run_scene(&scene).unwrap_err();
        assert!(format!("{:#}", err).contains("grid container must not use fixed positioning"));
    }
}
