//! Attribute and style reconciliation.
//!
//! Attributes are written through a single set rule shared by mount and
//! update. Falsy values (`false`, `0`, `NaN`, `""`, `"0"`) are never written,
//! and an update that turns a truthy value falsy removes the attribute.

use tessera_relief::{AttrValue, Attrs, Host, StyleMap, StylePriority};

const STYLE: &str = "style";
const IMPORTANT: &str = "!important";

/// Split a declaration value into its value and priority.
///
/// A trailing `!important`, optionally preceded by whitespace, is stripped.
///
/// ```
/// use tessera_atelier::attrs::parse_priority;
/// use tessera_relief::StylePriority;
///
/// assert_eq!(parse_priority("red !important"), ("red", StylePriority::Important));
/// assert_eq!(parse_priority("red"), ("red", StylePriority::Normal));
/// ```
pub fn parse_priority(value: &str) -> (&str, StylePriority) {
    match value.strip_suffix(IMPORTANT) {
        Some(rest) => (rest.trim_end(), StylePriority::Important),
        None => (value, StylePriority::Normal),
    }
}

/// Apply one attribute to an element following the set rule.
pub fn set_attr<H: Host>(host: &mut H, element: &H::Node, name: &str, value: &AttrValue) {
    if !value.is_truthy() {
        tracing::trace!(name, "skipping falsy attribute");
        return;
    }

    match (name, value) {
        (STYLE, AttrValue::Style(map)) => set_style_map(host, element, map),
        ("id", _) => host.set_id(element, &value.to_attr_string()),
        ("class", _) => host.set_class_name(element, &value.to_attr_string()),
        _ => host.set_attribute(element, name, &value.to_attr_string()),
    }
}

/// Apply every attribute of a freshly created element.
pub fn apply_attrs<H: Host>(host: &mut H, element: &H::Node, attrs: &Attrs) {
    for (name, value) in attrs {
        set_attr(host, element, name, value);
    }
}

/// Reconcile the attributes of an element from `prev` to `next`.
pub fn diff_attrs<H: Host>(
    host: &mut H,
    element: &H::Node,
    prev: Option<&Attrs>,
    next: Option<&Attrs>,
) {
    match (prev, next) {
        (None, None) => {}
        (None, Some(next)) => apply_attrs(host, element, next),
        (Some(prev), None) => {
            for (name, value) in prev {
                if value.is_truthy() {
                    host.remove_attribute(element, name);
                }
            }
        }
        (Some(prev), Some(next)) => {
            for (name, old) in prev {
                let new = match next.get(name) {
                    Some(new) if new.is_truthy() => new,
                    _ => {
                        if old.is_truthy() {
                            host.remove_attribute(element, name);
                        }
                        continue;
                    }
                };

                if old == new {
                    continue;
                }
                if name == STYLE {
                    clear_stale_style(host, element, old, new);
                }
                set_attr(host, element, name, new);
            }

            for (name, new) in next {
                if !prev.contains_key(name) {
                    set_attr(host, element, name, new);
                }
            }
        }
    }
}

fn set_style_map<H: Host>(host: &mut H, element: &H::Node, map: &StyleMap) {
    for (name, value) in map {
        let (value, priority) = parse_priority(value);
        host.set_style_property(element, name, value, priority);
    }
}

/// Drop style state the next value will not overwrite.
fn clear_stale_style<H: Host>(host: &mut H, element: &H::Node, old: &AttrValue, new: &AttrValue) {
    match (old, new) {
        (AttrValue::Style(old), AttrValue::Style(new)) => {
            for name in old.keys() {
                if !new.contains_key(name) {
                    host.remove_style_property(element, name);
                }
            }
        }
        (old, AttrValue::Style(_)) if old.is_truthy() => {
            host.remove_attribute(element, STYLE);
        }
        _ => {}
    }
}
