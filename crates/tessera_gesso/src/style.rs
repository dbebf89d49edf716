//! Inline style declarations.
//!
//! Mirrors what a browser keeps behind `element.style`: an ordered list of
//! declarations, serialized as `name: value;` or `name: value !important;`.

use phf::phf_set;
use tessera_carton::CompactString;
use tessera_relief::StylePriority;

/// Length properties whose bare `0` is serialized as `0px`.
static LENGTH_PROPERTIES: phf::Set<&'static str> = phf_set! {
    "width", "height", "min-width", "min-height", "max-width", "max-height",
    "top", "right", "bottom", "left", "inset",
    "margin", "margin-top", "margin-right", "margin-bottom", "margin-left",
    "padding", "padding-top", "padding-right", "padding-bottom", "padding-left",
    "border", "border-top", "border-right", "border-bottom", "border-left",
    "border-width", "border-radius", "border-spacing",
    "outline", "outline-width", "outline-offset",
    "gap", "row-gap", "column-gap", "font-size",
    "letter-spacing", "word-spacing", "text-indent", "flex-basis",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: CompactString,
    pub value: CompactString,
    pub priority: StylePriority,
}

/// Ordered inline declarations of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    declarations: Vec<Declaration>,
}

impl StyleDeclarations {
    /// Parse `a: 1; b: 2 !important` declaration text.
    ///
    /// Entries without a colon or with an empty name or value are skipped.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::default();
        for entry in text.split(';') {
            let Some((name, value)) = entry.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            let (value, priority) = match value.strip_suffix("!important") {
                Some(rest) => (rest.trim_end(), StylePriority::Important),
                None => (value, StylePriority::Normal),
            };
            if !name.is_empty() && !value.is_empty() {
                style.set(name, value, priority);
            }
        }
        style
    }

    /// Set a property, keeping its position when it already exists.
    pub fn set(&mut self, name: &str, value: &str, priority: StylePriority) {
        let value = normalize_value(name, value);
        match self.declarations.iter_mut().find(|d| d.name == name) {
            Some(declaration) => {
                declaration.value = value;
                declaration.priority = priority;
            }
            None => self.declarations.push(Declaration {
                name: name.into(),
                value,
                priority,
            }),
        }
    }

    /// Remove a property. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let len = self.declarations.len();
        self.declarations.retain(|d| d.name != name);
        self.declarations.len() != len
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Serialize as `cssText`.
    pub fn to_css_text(&self) -> CompactString {
        let mut out = CompactString::default();
        for declaration in &self.declarations {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&declaration.name);
            out.push_str(": ");
            out.push_str(&declaration.value);
            if declaration.priority.is_important() {
                out.push_str(" !important");
            }
            out.push(';');
        }
        out
    }
}

/// Rewrite bare zero lengths as `0px`.
fn normalize_value(name: &str, value: &str) -> CompactString {
    if !LENGTH_PROPERTIES.contains(name) || !value.split_ascii_whitespace().any(|t| t == "0") {
        return value.into();
    }

    let mut out = CompactString::default();
    for token in value.split_ascii_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(if token == "0" { "0px" } else { token });
    }
    out
}
