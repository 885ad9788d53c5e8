//! Fixed-placement grid: item descriptors and the geometry formulas.
//!
//! Items declare their placement with four data attributes:
//!
//! ```text
//! <div data-rows="1" data-cols="2" data-x="0" data-y="1">
//! ```
//!
//! `rows`/`x` drive the vertical axis (height, top) and `cols`/`y` drive the
//! horizontal axis (width, left). Spacing sits inside each spanned cell, so
//! an item spanning `n` columns is `n` pitches wide minus one gap.

use crate::box_model::{BoxMetrics, ComputedGeometry};
use crate::config::GridConfig;
use dom::ElementData;
use serde::Serialize;
use std::fmt;

/// Placement of one grid item, read from its data attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChildDescriptor {
    /// `data-rows`
    pub row_span: u32,
    /// `data-cols`
    pub column_span: u32,
    /// `data-x`
    pub row_index: u32,
    /// `data-y`
    pub column_index: u32,
}

/// Why an element could not be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorIssue {
    /// Attribute absent or not a non-negative integer.
    Invalid(&'static str),
    /// Span attribute present but zero.
    ZeroSpan(&'static str),
    /// `data-x + data-rows` does not fit the row range.
    RowOverflow,
}

impl fmt::Display for DescriptorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorIssue::Invalid(attr) => {
                write!(f, "data-{} is missing or not a non-negative integer", attr)
            }
            DescriptorIssue::ZeroSpan(attr) => write!(f, "data-{} must be at least 1", attr),
            DescriptorIssue::RowOverflow => f.write_str("data-x + data-rows overflows the row range"),
        }
    }
}

impl ChildDescriptor {
    pub const fn new(row_span: u32, column_span: u32, row_index: u32, column_index: u32) -> Self {
        Self {
            row_span,
            column_span,
            row_index,
            column_index,
        }
    }

    /// Read the placement attributes of an element.
    pub fn from_element(elem: &ElementData) -> Result<Self, DescriptorIssue> {
        let data = elem.dataset();
        let read = |name: &'static str| {
            data.get_number::<u32>(name)
                .ok_or(DescriptorIssue::Invalid(name))
        };

        let descriptor = Self {
            row_span: read("rows")?,
            column_span: read("cols")?,
            row_index: read("x")?,
            column_index: read("y")?,
        };

        if descriptor.row_span == 0 {
            return Err(DescriptorIssue::ZeroSpan("rows"));
        }
        if descriptor.column_span == 0 {
            return Err(DescriptorIssue::ZeroSpan("cols"));
        }
        if descriptor.row_index.checked_add(descriptor.row_span).is_none() {
            return Err(DescriptorIssue::RowOverflow);
        }
        Ok(descriptor)
    }

    /// One past the last row this item covers.
    #[inline]
    pub fn row_extent(&self) -> u32 {
        self.row_index.saturating_add(self.row_span)
    }
}

/// Geometry of one item for the given cell size.
pub fn compute_geometry(
    config: &GridConfig,
    metrics: &BoxMetrics,
    descriptor: &ChildDescriptor,
) -> ComputedGeometry {
    let vs = config.column_gap();
    let hs = config.row_gap();
    let col_pitch = metrics.column_pitch(config);
    let row_pitch = metrics.row_pitch(config);

    ComputedGeometry {
        width: descriptor.column_span as f32 * col_pitch - vs,
        height: descriptor.row_span as f32 * row_pitch - hs,
        left: descriptor.column_index as f32 * col_pitch,
        top: descriptor.row_index as f32 * row_pitch,
    }
}

/// Total container height for items reaching down to `max_row_extent`.
pub fn container_height(config: &GridConfig, metrics: &BoxMetrics, max_row_extent: u32) -> f32 {
    max_row_extent as f32 * metrics.row_pitch(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::TagName;

    fn cell(attrs: &[(&str, &str)]) -> ElementData {
        let mut elem = ElementData::new(TagName::div());
        for (name, value) in attrs {
            elem.set_attribute(name, value);
        }
        elem
    }

    #[test]
    fn test_read_descriptor() {
        let elem = cell(&[("data-rows", "2"), ("data-cols", "1"), ("data-x", "0"), ("data-y", "3")]);
        assert_eq!(
            ChildDescriptor::from_element(&elem),
            Ok(ChildDescriptor::new(2, 1, 0, 3))
        );
    }

    #[test]
    fn test_descriptor_issues() {
        let missing = cell(&[("data-rows", "1"), ("data-cols", "1"), ("data-x", "0")]);
        assert_eq!(
            ChildDescriptor::from_element(&missing),
            Err(DescriptorIssue::Invalid("y"))
        );

        let negative = cell(&[("data-rows", "1"), ("data-cols", "1"), ("data-x", "-1"), ("data-y", "0")]);
        assert_eq!(
            ChildDescriptor::from_element(&negative),
            Err(DescriptorIssue::Invalid("x"))
        );

        let zero = cell(&[("data-rows", "1"), ("data-cols", "0"), ("data-x", "0"), ("data-y", "0")]);
        let issue = ChildDescriptor::from_element(&zero).unwrap_err();
        assert_eq!(issue, DescriptorIssue::ZeroSpan("cols"));
        assert_eq!(issue.to_string(), "data-cols must be at least 1");
    }

    // The four items from the plugin's usage example, 4 columns at 400px:
    //   | #1 |   #2   |    |
    //   |─────────────| #3 |
    //   |      #4     |    |
    #[test]
    fn test_documented_example() {
        let config = GridConfig::new().with_columns(4);
        let metrics = BoxMetrics::compute(&config, 400.0);

        let expected = [
            (ChildDescriptor::new(1, 1, 0, 0), (85.0, 85.0, 0.0, 0.0)),
            (ChildDescriptor::new(1, 2, 0, 1), (190.0, 85.0, 105.0, 0.0)),
            (ChildDescriptor::new(2, 1, 0, 3), (85.0, 190.0, 315.0, 0.0)),
            (ChildDescriptor::new(1, 3, 1, 0), (295.0, 85.0, 0.0, 105.0)),
        ];

        for (descriptor, (width, height, left, top)) in expected {
            let g = compute_geometry(&config, &metrics, &descriptor);
            assert_eq!(g, ComputedGeometry { width, height, left, top }, "{descriptor:?}");
        }

        let extent = expected.iter().map(|(d, _)| d.row_extent()).max().unwrap();
        assert_eq!(extent, 2);
        assert_eq!(container_height(&config, &metrics, extent), 210.0);
    }

    #[test]
    fn test_spacing_absorbed_in_spans() {
        let config = GridConfig::new().with_columns(5).with_spacing(7.0, 3.0);
        let metrics = BoxMetrics::compute(&config, 973.0);

        for span in 1..=5 {
            let g = compute_geometry(&config, &metrics, &ChildDescriptor::new(span, span, 0, 0));
            let expected_w = span as f32 * (metrics.box_width + config.column_gap());
            let expected_h = span as f32 * (metrics.box_height + config.row_gap());
            assert!((g.width + config.column_gap() - expected_w).abs() < 1e-3);
            assert!((g.height + config.row_gap() - expected_h).abs() < 1e-3);
        }
    }

    #[test]
    fn test_full_row_fills_container() {
        let config = GridConfig::new().with_columns(4);
        let metrics = BoxMetrics::compute(&config, 400.0);
        let g = compute_geometry(&config, &metrics, &ChildDescriptor::new(1, 4, 0, 0));
        assert_eq!(g.left + g.width, 400.0);
    }

    #[test]
    fn test_row_overflow_rejected() {
        let elem = cell(&[
            ("data-rows", "1"),
            ("data-cols", "1"),
            ("data-x", "4294967295"),
            ("data-y", "0"),
        ]);
        assert_eq!(
            ChildDescriptor::from_element(&elem),
            Err(DescriptorIssue::RowOverflow)
        );

        let last_row = cell(&[
            ("data-rows", "1"),
            ("data-cols", "1"),
            ("data-x", "4294967294"),
            ("data-y", "0"),
        ]);
        let descriptor = ChildDescriptor::from_element(&last_row).unwrap();
        assert_eq!(descriptor.row_extent(), u32::MAX);
        assert_eq!(ChildDescriptor::new(2, 1, u32::MAX, 0).row_extent(), u32::MAX);
    }
}
