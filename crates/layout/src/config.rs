//! Grid configuration.
//!
//! Options use the plugin's option keys (`cols`, `hSpacing`, `vSpacing`,
//! `selector`, `aspectRatio`, `hBox`, `fluid`); any key left out keeps its
//! default.

use common::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Grid configuration, fixed for the lifetime of a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(rename = "cols")]
    pub column_count: u32,
    /// Spacing added above and below each box, in pixels.
    #[serde(rename = "hSpacing")]
    pub horizontal_spacing: f32,
    /// Spacing added left and right of each box, in pixels.
    #[serde(rename = "vSpacing")]
    pub vertical_spacing: f32,
    /// Selector for the grid items inside the container.
    pub selector: String,
    /// Box height as a multiple of box width.
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: f32,
    /// Fixed box height in pixels; 0 means derive it from `aspect_ratio`.
    #[serde(rename = "hBox")]
    pub fixed_box_height: f32,
    /// Recompute on viewport width changes.
    pub fluid: bool,
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a JSON option object over the defaults.
    pub fn from_json(options: &str) -> LayoutResult<Self> {
        let config: GridConfig = serde_json::from_str(options)?;
        Ok(config)
    }

    /// Merge an already-parsed option object over the defaults.
    pub fn from_value(options: serde_json::Value) -> LayoutResult<Self> {
        let config: GridConfig = serde_json::from_value(options)?;
        Ok(config)
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.column_count = columns;
        self
    }

    pub fn with_spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    pub fn with_selector(mut self, selector: &str) -> Self {
        self.selector = selector.to_string();
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    pub fn with_box_height(mut self, height: f32) -> Self {
        self.fixed_box_height = height;
        self
    }

    pub fn with_fluid(mut self, fluid: bool) -> Self {
        self.fluid = fluid;
        self
    }

    /// Horizontal gap between adjacent boxes (`vSpacing` on both sides).
    #[inline]
    pub fn column_gap(&self) -> f32 {
        self.vertical_spacing * 2.0
    }

    /// Vertical gap between adjacent boxes (`hSpacing` on both sides).
    #[inline]
    pub fn row_gap(&self) -> f32 {
        self.horizontal_spacing * 2.0
    }

    /// Fixed box height, if one overrides the aspect ratio.
    pub fn box_height_override(&self) -> Option<f32> {
        (self.fixed_box_height > 0.0).then_some(self.fixed_box_height)
    }

    /// Check option ranges.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.column_count == 0 {
            return Err(LayoutError::configuration("cols must be at least 1"));
        }
        let non_negative = [
            ("hSpacing", self.horizontal_spacing),
            ("vSpacing", self.vertical_spacing),
            ("hBox", self.fixed_box_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::configuration(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(LayoutError::configuration(format!(
                "aspectRatio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if self.selector.trim().is_empty() {
            return Err(LayoutError::configuration("selector must not be empty"));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: 3,
            horizontal_spacing: 10.0,
            vertical_spacing: 10.0,
            selector: "div".to_string(),
            aspect_ratio: 1.0,
            fixed_box_height: 0.0,
            fluid: false,
        }
    }
}
