//! Unit box dimensions and per-item geometry.

use crate::config::GridConfig;
use common::geometry::{Point, Rect, Size};
use serde::Serialize;

/// Size of one grid cell, shared by every item in a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoxMetrics {
    pub box_width: f32,
    pub box_height: f32,
}

impl BoxMetrics {
    /// Derive the cell size from the container's content width.
    pub fn compute(config: &GridConfig, container_width: f32) -> Self {
        let columns = config.column_count as f32;
        let box_width = (container_width - (columns - 1.0) * config.column_gap()) / columns;
        let box_height = config
            .box_height_override()
            .unwrap_or(box_width * config.aspect_ratio);
        Self {
            box_width,
            box_height,
        }
    }

    /// Distance between the left edges of adjacent columns.
    #[inline]
    pub fn column_pitch(&self, config: &GridConfig) -> f32 {
        self.box_width + config.column_gap()
    }

    /// Distance between the top edges of adjacent rows.
    #[inline]
    pub fn row_pitch(&self, config: &GridConfig) -> f32 {
        self.box_height + config.row_gap()
    }

    pub fn size(&self) -> Size {
        Size::new(self.box_width, self.box_height)
    }
}

/// Pixel geometry of one grid item, relative to the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ComputedGeometry {
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl ComputedGeometry {
    pub fn to_rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.left, self.top), Size::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_width_formula() {
        let config = GridConfig::new().with_columns(4);
        let metrics = BoxMetrics::compute(&config, 400.0);
        assert_eq!(metrics.box_width, 85.0);
        assert_eq!(metrics.box_height, 85.0);
        assert_eq!(metrics.column_pitch(&config), 105.0);
        assert_eq!(metrics.row_pitch(&config), 105.0);
    }

    #[test]
    fn test_aspect_ratio_and_override() {
        let config = GridConfig::new().with_columns(2).with_spacing(0.0, 0.0).with_aspect_ratio(1.5);
        assert_eq!(BoxMetrics::compute(&config, 200.0).size(), Size::new(100.0, 150.0));

        let fixed = config.with_box_height(40.0);
        assert_eq!(BoxMetrics::compute(&fixed, 200.0).size(), Size::new(100.0, 40.0));
    }

    #[test]
    fn test_single_column_has_no_gap() {
        let config = GridConfig::new().with_columns(1);
        assert_eq!(BoxMetrics::compute(&config, 320.0).box_width, 320.0);
    }

    #[test]
    fn test_to_rect() {
        let geometry = ComputedGeometry {
            width: 190.0,
            height: 85.0,
            left: 105.0,
            top: 0.0,
        };
        assert_eq!(geometry.to_rect(), Rect::new(105.0, 0.0, 190.0, 85.0));
    }
}
