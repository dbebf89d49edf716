//! Attribute values.
//!
//! Values mirror the literal grammar: strings, numbers, booleans, and for
//! `style` an ordered map of CSS property to value.

use serde::{Deserialize, Serialize};
use tessera_carton::{format_compact, CompactString, FxIndexMap};

/// Attribute map of an element, iterated in author order.
pub type Attrs = FxIndexMap<CompactString, AttrValue>;

/// Object form of the `style` attribute, iterated in author order.
pub type StyleMap = FxIndexMap<CompactString, CompactString>;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// `true` renders a valueless attribute, `false` renders nothing
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value (for `style`, the verbatim declaration text)
    Str(CompactString),
    /// Object form of `style`
    Style(StyleMap),
    /// Explicit `null`, never written
    Null,
}

impl AttrValue {
    /// Whether the value is written at all.
    ///
    /// `false`, `0`, `NaN`, `""`, `"0"` and `null` are suppressed.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Str(value) => !value.is_empty() && value != "0",
            Self::Style(_) => true,
            Self::Null => false,
        }
    }

    /// Whether this is the object form of `style`.
    #[inline]
    pub fn is_style_map(&self) -> bool {
        matches!(self, Self::Style(_))
    }

    /// String written to the host for this value.
    pub fn to_attr_string(&self) -> CompactString {
        match self {
            Self::Bool(true) => CompactString::default(),
            Self::Bool(false) => CompactString::const_new("false"),
            Self::Number(value) => format_number(*value),
            Self::Str(value) => value.clone(),
            Self::Style(map) => style_text(map),
            Self::Null => CompactString::const_new("null"),
        }
    }
}

/// Serialize a style map as declaration text (`a: 1; b: 2;`).
pub fn style_text(map: &StyleMap) -> CompactString {
    let mut out = CompactString::default();
    for (name, value) in map {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}

fn format_number(value: f64) -> CompactString {
    if value == 0.0 {
        // Covers negative zero
        return CompactString::const_new("0");
    }
    format_compact!("{value}")
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<CompactString> for AttrValue {
    fn from(value: CompactString) -> Self {
        Self::Str(value)
    }
}

impl From<StyleMap> for AttrValue {
    fn from(value: StyleMap) -> Self {
        Self::Style(value)
    }
}
