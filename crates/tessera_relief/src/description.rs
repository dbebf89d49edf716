//! Author-facing description grammar and its normalizer.
//!
//! A description is the literal shape `{ tag?, attrs?, children?, value?, key? }`.
//! `children` may be a string, a single child or a list; normalization resolves
//! that into the one canonical shape of [`VNode`] so nothing downstream has to.

use serde::{Deserialize, Serialize};
use tessera_carton::CompactString;

use crate::attr::Attrs;
use crate::node::{Key, NodeKind, NodeType, VNode};

/// A node description as written by an author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    /// Tag or sentinel (`#`, `!`, `<`); absent for fragments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<CompactString>,
    /// Element attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,
    /// Children in any accepted shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
    /// Leaf value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CompactString>,
    /// Sibling key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
}

/// Accepted shapes of `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    /// Plain string
    Text(CompactString),
    /// List of children
    Many(Vec<Child>),
    /// Single child
    One(Box<Child>),
}

/// A child entry: a nested description or a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(CompactString),
    Node(Description),
}

impl Description {
    /// Create a description for a tag.
    pub fn new(tag: Option<&str>) -> Self {
        Self {
            tag: tag.map(CompactString::from),
            ..Default::default()
        }
    }

    /// Normalize into an unbound virtual node.
    ///
    /// - A string `children` of a leaf moves into `value`.
    /// - A non-list `children` is wrapped into a one-element list.
    /// - Bare strings in a container's children become text nodes.
    /// - Leaves never keep children; an explicit `value` wins over string
    ///   children, and non-string children of a leaf are dropped.
    pub fn normalize<N>(self) -> VNode<N> {
        let Self {
            tag,
            attrs,
            children,
            value,
            key,
        } = self;

        let node_type = NodeType::classify(tag.as_deref());
        let mut node = if node_type.is_leaf() {
            let value = value
                .or_else(|| children.as_ref().map(Children::text_content))
                .unwrap_or_default();
            VNode::new(match node_type {
                NodeType::Text => NodeKind::Text(value),
                NodeType::Comment => NodeKind::Comment(value),
                _ => NodeKind::RawMarkup(value),
            })
        } else {
            let mut kind = NodeKind::from_tag(tag.as_deref());
            if let NodeKind::Element { attrs: slot, .. } = &mut kind {
                *slot = attrs;
            }
            let mut node = VNode::new(kind);
            if let Some(children) = children {
                node.children = children.normalize();
            }
            node
        };

        node.key = key;
        node
    }
}

impl Children {
    /// Canonicalize into a list of unbound nodes.
    pub fn normalize<N>(self) -> Vec<VNode<N>> {
        match self {
            Self::Text(text) => vec![VNode::text(text)],
            Self::One(child) => vec![child.normalize()],
            Self::Many(children) => children.into_iter().map(Child::normalize).collect(),
        }
    }

    /// Concatenated string content, used when a leaf receives children.
    fn text_content(&self) -> CompactString {
        match self {
            Self::Text(text) => text.clone(),
            Self::One(child) => match child.as_ref() {
                Child::Text(text) => text.clone(),
                Child::Node(_) => CompactString::default(),
            },
            Self::Many(children) => {
                let mut out = CompactString::default();
                for child in children {
                    if let Child::Text(text) = child {
                        out.push_str(text);
                    } else {
                        tracing::trace!("dropping non-text child of a leaf description");
                    }
                }
                out
            }
        }
    }
}

impl Child {
    /// Normalize into an unbound node.
    pub fn normalize<N>(self) -> VNode<N> {
        match self {
            Self::Text(text) => VNode::text(text),
            Self::Node(description) => description.normalize(),
        }
    }
}

impl<N> From<Description> for VNode<N> {
    fn from(description: Description) -> Self {
        description.normalize()
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<Description> for Child {
    fn from(description: Description) -> Self {
        Self::Node(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> VNode<u32> {
        serde_json::from_str::<Description>(json)
            .unwrap()
            .normalize()
    }

    #[test]
    fn test_string_children_of_leaf_move_into_value() {
        let node = parse(r##"{"tag": "#", "children": "Hi"}"##);
        assert_eq!(node.node_type(), NodeType::Text);
        assert_eq!(node.value(), Some("Hi"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_explicit_value_wins() {
        let node = parse(r##"{"tag": "!", "value": "kept", "children": "dropped"}"##);
        assert_eq!(node.value(), Some("kept"));
    }

    #[test]
    fn test_single_child_is_wrapped() {
        let node = parse(r##"{"tag": "div", "children": {"tag": "#", "children": "text"}}"##);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].value(), Some("text"));
    }

    #[test]
    fn test_string_children_of_element_become_text() {
        let node = parse(r##"{"tag": "div", "children": ["t0", {"tag": "b"}, "t1"]}"##);
        let types: Vec<_> = node.children.iter().map(VNode::node_type).collect();
        assert_eq!(
            types,
            [NodeType::Text, NodeType::Element, NodeType::Text]
        );

        let node = parse(r##"{"tag": "li", "children": "t0"}"##);
        assert_eq!(node.children[0].value(), Some("t0"));
    }

    #[test]
    fn test_empty_and_absent_children() {
        assert!(parse(r##"{"tag": "div", "children": []}"##).children.is_empty());
        assert!(parse(r##"{"tag": "div"}"##).children.is_empty());
        assert!(parse(r##"{"tag": "div", "children": null, "attrs": null}"##)
            .attrs()
            .is_none());
    }

    #[test]
    fn test_fragment_and_keys() {
        let node = parse(r##"{"key": "4", "children": [{"tag": "div", "key": 5}]}"##);
        assert!(node.is_fragment());
        assert_eq!(node.key, Some(Key::from("4")));
        assert_eq!(node.children[0].key, Some(Key::Int(5)));
    }

    #[test]
    fn test_fractional_key() {
        let node = parse(r##"{"children": [{"tag": "a", "key": 1.5}, {"tag": "b", "key": 2.0}]}"##);
        assert_eq!(node.children[0].key, Some(Key::from(1.5)));
        assert_eq!(node.children[1].key, Some(Key::Int(2)));
    }

    #[test]
    fn test_raw_markup() {
        let node = parse(r##"{"tag": "<", "value": "<b>x</b><i>y</i>"}"##);
        assert_eq!(node.node_type(), NodeType::RawMarkup);
        assert_eq!(node.value(), Some("<b>x</b><i>y</i>"));
    }

    #[test]
    fn test_attrs_only_on_elements() {
        let node = parse(r##"{"tag": "#", "value": "x", "attrs": {"id": "a"}}"##);
        assert!(node.attrs().is_none());

        let node = parse(r##"{"tag": "div", "attrs": {}}"##);
        assert_eq!(node.attrs().map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_roundtrip_serialization_skips_absent_fields() {
        let description = Description::new(Some("div"));
        let json = serde_json::to_string(&description).unwrap();
        assert_eq!(json, r##"{"tag":"div"}"##);
    }
}
