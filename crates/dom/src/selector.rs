//! Simple selector parsing and matching.
//!
//! Supports comma-separated lists of compound selectors built from a tag
//! (or `*`), `#id`, `.class` and `[attr]` / `[attr<op>value]` parts.
//! Combinators are not supported.

use crate::element::ElementData;
use smallvec::SmallVec;

/// A single selector component.
#[derive(Clone, Debug, PartialEq)]
pub enum SimpleSelector {
    Tag(String),
    Id(String),
    Class(String),
    Attribute {
        name: String,
        op: Option<String>,
        value: Option<String>,
    },
    Universal,
}

impl SimpleSelector {
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            SimpleSelector::Tag(tag) => elem.tag_name.as_str() == tag,
            SimpleSelector::Id(id) => elem.id.as_ref().map(|i| i.as_ref()) == Some(id.as_str()),
            SimpleSelector::Class(class) => elem.has_class(class),
            SimpleSelector::Attribute { name, op, value } => {
                matches_attribute(elem, name, op.as_deref(), value.as_deref())
            }
            SimpleSelector::Universal => true,
        }
    }
}

fn matches_attribute(elem: &ElementData, name: &str, op: Option<&str>, value: Option<&str>) -> bool {
    let attr_value = match elem.get_attribute(name) {
        Some(v) => v,
        None => return false,
    };

    match (op, value) {
        (None, _) => true,
        (Some("="), Some(v)) => attr_value == v,
        (Some("~="), Some(v)) => attr_value.split_whitespace().any(|w| w == v),
        (Some("|="), Some(v)) => attr_value == v || attr_value.starts_with(&format!("{}-", v)),
        (Some("^="), Some(v)) => attr_value.starts_with(v),
        (Some("$="), Some(v)) => attr_value.ends_with(v),
        (Some("*="), Some(v)) => attr_value.contains(v),
        _ => false,
    }
}

/// Compound selector: all parts must match.
type Compound = SmallVec<[SimpleSelector; 4]>;

/// Comma-separated selector list: any compound may match.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectorList {
    compounds: Vec<Compound>,
}

impl SelectorList {
    /// Parse a selector list. Returns `None` for empty input, combinators,
    /// or malformed parts.
    pub fn parse(selector: &str) -> Option<Self> {
        let compounds = selector
            .split(',')
            .map(|part| parse_compound(part.trim()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { compounds })
    }

    pub fn matches(&self, elem: &ElementData) -> bool {
        self.compounds
            .iter()
            .any(|compound| compound.iter().all(|s| s.matches(elem)))
    }
}

fn parse_compound(input: &str) -> Option<Compound> {
    if input.is_empty() || input.contains(char::is_whitespace) {
        return None;
    }

    let mut parts = Compound::new();
    let mut rest = input;

    // Leading tag or universal selector
    let tag_end = rest.find(['#', '.', '[']).unwrap_or(rest.len());
    let tag = &rest[..tag_end];
    match tag {
        "" => {}
        "*" => parts.push(SimpleSelector::Universal),
        t if is_ident(t) => {
            parts.push(SimpleSelector::Tag(t.to_ascii_lowercase()))
        }
        _ => return None,
    }
    rest = &rest[tag_end..];

    while let Some(first) = rest.chars().next() {
        match first {
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(['#', '.', '[']).unwrap_or(body.len());
                let name = &body[..end];
                if !is_ident(name) {
                    return None;
                }
                parts.push(if first == '#' {
                    SimpleSelector::Id(name.to_string())
                } else {
                    SimpleSelector::Class(name.to_string())
                });
                rest = &body[end..];
            }
            '[' => {
                let close = rest.find(']')?;
                parts.push(parse_attribute(&rest[1..close])?);
                rest = &rest[close + 1..];
            }
            _ => return None,
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_attribute(attr_selector: &str) -> Option<SimpleSelector> {
    let attr_selector = attr_selector.trim();
    let Some(eq_pos) = attr_selector.find('=') else {
        if attr_selector.is_empty() {
            return None;
        }
        return Some(SimpleSelector::Attribute {
            name: attr_selector.to_ascii_lowercase(),
            op: None,
            value: None,
        });
    };

    let (name_part, value_part) = attr_selector.split_at(eq_pos);
    let value = value_part[1..].trim().trim_matches(|c| c == '"' || c == '\'');

    let (name, op) = match name_part.chars().last() {
        Some(c @ ('^' | '$' | '*' | '~' | '|')) => {
            (&name_part[..name_part.len() - 1], format!("{}=", c))
        }
        _ => (name_part, "=".to_string()),
    };
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(SimpleSelector::Attribute {
        name: name.to_ascii_lowercase(),
        op: Some(op),
        value: Some(value.to_string()),
    })
}
