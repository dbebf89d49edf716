//! Virtual node definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_carton::{CompactString, SmallVec};

use crate::attr::{AttrValue, Attrs, StyleMap};

/// Tag sentinel of text nodes
pub const TEXT_TAG: &str = "#";
/// Tag sentinel of comment nodes
pub const COMMENT_TAG: &str = "!";
/// Tag sentinel of raw markup nodes
pub const RAW_MARKUP_TAG: &str = "<";

/// Unique identifier of a mounted virtual node within one reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VNodeId(pub u64);

impl fmt::Display for VNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Node type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Text = 0,
    Comment = 1,
    RawMarkup = 2,
    Element = 3,
    Fragment = 4,
}

impl NodeType {
    /// Classify a description by its tag sentinel.
    ///
    /// An element tag equal to a sentinel is classified as that sentinel's
    /// variant.
    pub fn classify(tag: Option<&str>) -> Self {
        match tag {
            Some(TEXT_TAG) => Self::Text,
            Some(COMMENT_TAG) => Self::Comment,
            Some(RAW_MARKUP_TAG) => Self::RawMarkup,
            Some(_) => Self::Element,
            None => Self::Fragment,
        }
    }

    /// Whether nodes of this type carry a `value` instead of children.
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::Text | Self::Comment | Self::RawMarkup)
    }
}

/// Sibling key. Numeric and string keys never compare equal.
///
/// Integral numbers are always held as [`Key::Int`], so `1` and `1.0` are the
/// same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "KeyRepr")]
pub enum Key {
    Int(i64),
    Float(FloatKey),
    Str(CompactString),
}

/// Non-integral numeric key, compared by value with all NaNs equal.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct FloatKey(f64);

impl FloatKey {
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    fn bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for FloatKey {}

impl std::hash::Hash for FloatKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KeyRepr {
    Int(i64),
    Float(f64),
    Str(CompactString),
}

impl From<KeyRepr> for Key {
    fn from(repr: KeyRepr) -> Self {
        match repr {
            KeyRepr::Int(key) => Self::Int(key),
            KeyRepr::Float(key) => Self::from(key),
            KeyRepr::Str(key) => Self::Str(key),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(key) => write!(f, "{key}"),
            Self::Float(key) => write!(f, "{}", key.0),
            Self::Str(key) => write!(f, "{key:?}"),
        }
    }
}

impl From<f64> for Key {
    fn from(key: f64) -> Self {
        // -0 folds into 0
        if key.fract() == 0.0 && key >= i64::MIN as f64 && key < i64::MAX as f64 {
            Self::Int(key as i64)
        } else {
            Self::Float(FloatKey(key))
        }
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

impl From<i32> for Key {
    fn from(key: i32) -> Self {
        Self::Int(i64::from(key))
    }
}

impl From<u32> for Key {
    fn from(key: u32) -> Self {
        Self::Int(i64::from(key))
    }
}

impl From<usize> for Key {
    fn from(key: usize) -> Self {
        Self::Int(key as i64)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::Str(key.into())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self::Str(key.into())
    }
}

/// Node variant and its own data.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Text leaf
    Text(CompactString),
    /// Comment leaf
    Comment(CompactString),
    /// Markup parsed by the host into zero or more sibling nodes
    RawMarkup(CompactString),
    /// Host element
    Element {
        tag: CompactString,
        attrs: Option<Attrs>,
    },
    /// Transparent grouping without a host node of its own
    Fragment,
}

impl NodeKind {
    /// Create an empty kind for a tag, following [`NodeType::classify`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match NodeType::classify(tag) {
            NodeType::Text => Self::Text(CompactString::default()),
            NodeType::Comment => Self::Comment(CompactString::default()),
            NodeType::RawMarkup => Self::RawMarkup(CompactString::default()),
            NodeType::Element => Self::Element {
                tag: tag.unwrap_or_default().into(),
                attrs: None,
            },
            NodeType::Fragment => Self::Fragment,
        }
    }

    /// Get the node type.
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Text(_) => NodeType::Text,
            Self::Comment(_) => NodeType::Comment,
            Self::RawMarkup(_) => NodeType::RawMarkup,
            Self::Element { .. } => NodeType::Element,
            Self::Fragment => NodeType::Fragment,
        }
    }

    /// Get the tag, with sentinels for leaves and `None` for fragments.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Text(_) => Some(TEXT_TAG),
            Self::Comment(_) => Some(COMMENT_TAG),
            Self::RawMarkup(_) => Some(RAW_MARKUP_TAG),
            Self::Element { tag, .. } => Some(tag.as_str()),
            Self::Fragment => None,
        }
    }
}

/// Host nodes owned by a virtual node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding<N> {
    /// Not mounted, or a fragment
    Unbound,
    /// Text, comment or element host node
    Node(N),
    /// Raw markup siblings, in document order
    Tracking(SmallVec<[N; 4]>),
}

impl<N> Default for Binding<N> {
    fn default() -> Self {
        Self::Unbound
    }
}

impl<N> Binding<N> {
    /// First host node of this binding.
    pub fn first(&self) -> Option<&N> {
        match self {
            Self::Unbound => None,
            Self::Node(node) => Some(node),
            Self::Tracking(nodes) => nodes.first(),
        }
    }

    /// Last host node of this binding.
    pub fn last(&self) -> Option<&N> {
        match self {
            Self::Unbound => None,
            Self::Node(node) => Some(node),
            Self::Tracking(nodes) => nodes.last(),
        }
    }

    /// The single bound host node, if any.
    pub fn node(&self) -> Option<&N> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Iterate over every owned host node.
    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        match self {
            Self::Unbound => <&[N]>::default().iter(),
            Self::Node(node) => std::slice::from_ref(node).iter(),
            Self::Tracking(nodes) => nodes.iter(),
        }
    }

    /// Take the binding, leaving it unbound.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

/// A virtual node, generic over the host node handle `N`.
///
/// Nodes are created unbound, either by normalizing a
/// [`Description`](crate::Description) or with the builder constructors below.
/// `binding` and `id` are set by the reconciler once the node is mounted.
/// Cloning a mounted node yields an alias of the same mounted state, which is
/// only meaningful as the "nothing changed" argument of an update.
#[derive(Debug, Clone)]
pub struct VNode<N> {
    /// Variant and own data
    pub kind: NodeKind,
    /// Sibling key
    pub key: Option<Key>,
    /// Children, always empty for leaves
    pub children: Vec<VNode<N>>,
    /// Host nodes owned by this node (set by the reconciler)
    pub binding: Binding<N>,
    /// Mounted identity (set by the reconciler)
    pub id: Option<VNodeId>,
}

impl<N> VNode<N> {
    /// Create an unbound node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            children: Vec::new(),
            binding: Binding::Unbound,
            id: None,
        }
    }

    /// Create a text node.
    pub fn text(value: impl Into<CompactString>) -> Self {
        Self::new(NodeKind::Text(value.into()))
    }

    /// Create a comment node.
    pub fn comment(value: impl Into<CompactString>) -> Self {
        Self::new(NodeKind::Comment(value.into()))
    }

    /// Create a raw markup node.
    pub fn raw(markup: impl Into<CompactString>) -> Self {
        Self::new(NodeKind::RawMarkup(markup.into()))
    }

    /// Create a node for a tag. Sentinel tags produce empty leaves.
    pub fn element(tag: &str) -> Self {
        Self::new(NodeKind::from_tag(Some(tag)))
    }

    /// Create a fragment.
    pub fn fragment(children: impl IntoIterator<Item = VNode<N>>) -> Self {
        Self::new(NodeKind::Fragment).with_children(children)
    }

    /// Set the key.
    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set an attribute. Ignored on anything but elements.
    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        if let NodeKind::Element { attrs, .. } = &mut self.kind {
            attrs
                .get_or_insert_with(Attrs::default)
                .insert(name.into(), value.into());
        }
        self
    }

    /// Set the object form of `style`.
    pub fn with_style<K, V>(self, declarations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<CompactString>,
        V: Into<CompactString>,
    {
        let map: StyleMap = declarations
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.with_attr("style", map)
    }

    /// Add a child. Ignored on leaves.
    pub fn with_child(mut self, child: VNode<N>) -> Self {
        if !self.is_leaf() {
            self.children.push(child);
        }
        self
    }

    /// Add children. Ignored on leaves.
    pub fn with_children(mut self, children: impl IntoIterator<Item = VNode<N>>) -> Self {
        if !self.is_leaf() {
            self.children.extend(children);
        }
        self
    }

    /// Get the node type.
    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// Get the tag, with sentinels for leaves and `None` for fragments.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.kind.tag()
    }

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node_type().is_leaf()
    }

    /// Whether this node is a fragment.
    #[inline]
    pub fn is_fragment(&self) -> bool {
        matches!(self.kind, NodeKind::Fragment)
    }

    /// Whether this node has been mounted by a reconciler.
    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.id.is_some()
    }

    /// Leaf value, if this is a leaf.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(value) | NodeKind::Comment(value) | NodeKind::RawMarkup(value) => {
                Some(value.as_str())
            }
            _ => None,
        }
    }

    /// Element attributes, if present.
    pub fn attrs(&self) -> Option<&Attrs> {
        match &self.kind {
            NodeKind::Element { attrs, .. } => attrs.as_ref(),
            _ => None,
        }
    }

    /// The single bound host node (text, comment or element).
    #[inline]
    pub fn host_node(&self) -> Option<&N> {
        self.binding.node()
    }

    /// First host node in document order, looking through fragments.
    pub fn first_host_node(&self) -> Option<&N> {
        match self.kind {
            NodeKind::Fragment => self.children.iter().find_map(VNode::first_host_node),
            _ => self.binding.first(),
        }
    }

    /// Last host node in document order, looking through fragments.
    pub fn last_host_node(&self) -> Option<&N> {
        match self.kind {
            NodeKind::Fragment => self.children.iter().rev().find_map(VNode::last_host_node),
            _ => self.binding.last(),
        }
    }
}

impl<N: Clone> VNode<N> {
    /// Collect the top-level host nodes of this node in document order.
    ///
    /// Fragments contribute the top-level host nodes of their children.
    pub fn collect_host_nodes(&self, out: &mut Vec<N>) {
        match self.kind {
            NodeKind::Fragment => {
                for child in &self.children {
                    child.collect_host_nodes(out);
                }
            }
            _ => out.extend(self.binding.iter().cloned()),
        }
    }
}
