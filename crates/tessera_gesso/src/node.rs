//! Arena nodes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_carton::{CompactString, FxIndexMap};

use crate::style::StyleDeclarations;

/// Handle of a node in a [`MemoryHost`](crate::MemoryHost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element state.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub tag: CompactString,
    /// Attributes in insertion order; `style` holds the serialized text
    pub attrs: FxIndexMap<CompactString, CompactString>,
    /// Parsed inline style, kept in sync with the `style` attribute
    pub style: StyleDeclarations,
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(CompactString),
    Comment(CompactString),
    Fragment,
}

/// Node kind, for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostNodeKind {
    Element,
    Text,
    Comment,
    Fragment,
}

/// A node slot in the arena.
#[derive(Debug, Clone)]
pub struct HostNode {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl HostNode {
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> HostNodeKind {
        match self.data {
            NodeData::Element(_) => HostNodeKind::Element,
            NodeData::Text(_) => HostNodeKind::Text,
            NodeData::Comment(_) => HostNodeKind::Comment,
            NodeData::Fragment => HostNodeKind::Fragment,
        }
    }

    pub fn element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }
}
