//! Inline style declarations (`style="..."`).

use common::Length;
use indexmap::IndexMap;
use std::fmt;

/// CSS `position` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Position::Static),
            "relative" => Some(Position::Relative),
            "absolute" => Some(Position::Absolute),
            "fixed" => Some(Position::Fixed),
            "sticky" => Some(Position::Sticky),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
            Position::Sticky => "sticky",
        }
    }
}

/// CSS `display` value, limited to what grid items use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Block,
    Inline,
    InlineBlock,
    None,
}

impl Display {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "block" => Some(Display::Block),
            "inline" => Some(Display::Inline),
            "inline-block" => Some(Display::InlineBlock),
            "none" => Some(Display::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::None => "none",
        }
    }
}

/// Ordered inline style declarations.
///
/// Property names are stored lowercase. Setting an existing property keeps
/// its original position, matching how browsers serialize `element.style`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    declarations: IndexMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value.
    pub fn parse(css: &str) -> Self {
        let mut style = Self::new();
        for declaration in css.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set(name, value);
        }
        style
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.declarations
            .insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.declarations.shift_remove(&name.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Specified `position`, falling back to `static`.
    pub fn position(&self) -> Position {
        self.get("position")
            .and_then(Position::parse)
            .unwrap_or_default()
    }

    pub fn set_position(&mut self, position: Position) {
        self.set("position", position.as_str());
    }

    /// Specified `display`, if any.
    pub fn display(&self) -> Option<Display> {
        self.get("display").and_then(Display::parse)
    }

    pub fn set_display(&mut self, display: Display) {
        self.set("display", display.as_str());
    }

    /// A length-valued property. Unparsable values read as `None`.
    pub fn length(&self, name: &str) -> Option<Length> {
        self.get(name).and_then(Length::parse)
    }

    /// Set a length-valued property in pixels.
    pub fn set_px(&mut self, name: &str, value: f32) {
        self.set(name, &Length::Px(value).to_string());
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.declarations {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}: {};", name, value)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        let style = InlineStyle::parse("Width: 400px; position:relative;; bogus; color:");
        assert_eq!(style.get("width"), Some("400px"));
        assert_eq!(style.position(), Position::Relative);
        assert_eq!(style.length("width"), Some(Length::Px(400.0)));
        assert_eq!(style.get("color"), None);
    }

    #[test]
    fn test_default_position_is_static() {
        let style = InlineStyle::parse("position: sideways");
        assert_eq!(style.position(), Position::Static);
        assert_eq!(InlineStyle::new().position(), Position::Static);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let mut style = InlineStyle::parse("position: static; width: 400px");
        style.set_position(Position::Relative);
        style.set_display(Display::Block);
        style.set_px("height", 210.0);
        assert_eq!(
            style.to_string(),
            "position: relative; width: 400px; display: block; height: 210px;"
        );
        assert_eq!(InlineStyle::parse(&style.to_string()), style);
    }
}
