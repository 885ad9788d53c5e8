//! CSS length values as they appear in inline style.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A CSS length value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the containing block width.
    Percent(f32),
    /// Viewport width percentage.
    Vw(f32),
    /// Viewport height percentage.
    Vh(f32),
    /// Auto value.
    Auto,
}

impl Default for Length {
    fn default() -> Self {
        Length::Auto
    }
}

impl Length {
    /// Parse a length from a style value such as `400px`, `100%`, `50vw`,
    /// `auto` or a unitless `0`.
    pub fn parse(value: &str) -> Option<Length> {
        let value = value.trim().to_ascii_lowercase();
        if value == "auto" {
            return Some(Length::Auto);
        }

        let (number, unit) = if let Some(n) = value.strip_suffix("px") {
            (n, "px")
        } else if let Some(n) = value.strip_suffix('%') {
            (n, "%")
        } else if let Some(n) = value.strip_suffix("vw") {
            (n, "vw")
        } else if let Some(n) = value.strip_suffix("vh") {
            (n, "vh")
        } else {
            // Only zero may omit its unit
            return match value.parse::<f32>() {
                Ok(v) if v == 0.0 => Some(Length::Px(0.0)),
                _ => None,
            };
        };

        let number = number.trim_end().parse::<f32>().ok()?;
        if !number.is_finite() {
            return None;
        }
        Some(match unit {
            "px" => Length::Px(number),
            "%" => Length::Percent(number),
            "vw" => Length::Vw(number),
            _ => Length::Vh(number),
        })
    }

    /// Convert to pixels. `Auto` resolves to the containing block width.
    pub fn to_px(&self, context: &LengthContext) -> f32 {
        match self {
            Length::Px(v) => *v,
            Length::Percent(v) => v * context.containing_width / 100.0,
            Length::Vw(v) => v * context.viewport_width / 100.0,
            Length::Vh(v) => v * context.viewport_height / 100.0,
            Length::Auto => context.containing_width,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
            Length::Vw(v) => write!(f, "{}vw", v),
            Length::Vh(v) => write!(f, "{}vh", v),
            Length::Auto => write!(f, "auto"),
        }
    }
}

/// Context for resolving relative length units.
#[derive(Clone, Copy, Debug)]
pub struct LengthContext {
    pub containing_width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl LengthContext {
    pub fn new(containing_width: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            containing_width,
            viewport_width,
            viewport_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!(Length::parse("400px"), Some(Length::Px(400.0)));
        assert_eq!(Length::parse(" 100% "), Some(Length::Percent(100.0)));
        assert_eq!(Length::parse("50vw"), Some(Length::Vw(50.0)));
        assert_eq!(Length::parse("AUTO"), Some(Length::Auto));
        assert_eq!(Length::parse("0"), Some(Length::Px(0.0)));
        assert_eq!(Length::parse("12"), None);
        assert_eq!(Length::parse("wide"), None);
    }

    #[test]
    fn test_to_px() {
        let ctx = LengthContext::new(800.0, 1280.0, 720.0);
        assert_eq!(Length::Px(85.0).to_px(&ctx), 85.0);
        assert_eq!(Length::Percent(50.0).to_px(&ctx), 400.0);
        assert_eq!(Length::Vw(25.0).to_px(&ctx), 320.0);
        assert_eq!(Length::Vh(50.0).to_px(&ctx), 360.0);
        assert_eq!(Length::Auto.to_px(&ctx), 800.0);
    }

    #[test]
    fn test_display_round_trips_px() {
        assert_eq!(Length::Px(190.0).to_string(), "190px");
        assert_eq!(Length::parse(&Length::Px(62.5).to_string()), Some(Length::Px(62.5)));
    }
}
