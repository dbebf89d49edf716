//! In-memory host tree.

use tessera_relief::{Host, StylePriority};

use crate::journal::{Mutation, MutationStats};
use crate::markup::{parse_fragment, MarkupNode};
use crate::node::{ElementData, HostNode, HostNodeKind, NodeData, NodeId};
use crate::style::StyleDeclarations;

const STYLE: &str = "style";

/// An arena-backed host tree that records every call made on it.
///
/// Nodes are never freed; a detached node simply has no parent. Handles stay
/// valid for the lifetime of the host.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    nodes: Vec<HostNode>,
    journal: Vec<Mutation>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, node: NodeId) -> Option<HostNodeKind> {
        self.get(node).map(HostNode::kind)
    }

    /// Tag of an element.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|element| element.tag.as_str())
    }

    /// Content of a text or comment node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.get(node)?.data {
            NodeData::Text(text) | NodeData::Comment(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Serialized attribute value, including `style`.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attrs.get(name).map(|v| v.as_str())
    }

    /// Attributes in serialization order.
    pub fn attributes(&self, node: NodeId) -> Vec<(&str, &str)> {
        self.element(node).map_or_else(Vec::new, |element| {
            element
                .attrs
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect()
        })
    }

    /// Value and priority of one inline style property.
    pub fn style_property(&self, node: NodeId, name: &str) -> Option<(&str, StylePriority)> {
        self.element(node)?
            .style
            .get(name)
            .map(|declaration| (declaration.value.as_str(), declaration.priority))
    }

    /// Text content of a subtree, comments excluded.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match self.get(node).map(|n| &n.data) {
            Some(NodeData::Text(text)) => out.push_str(text),
            Some(NodeData::Element(_) | NodeData::Fragment) => {
                for &child in self.children(node) {
                    self.collect_text(child, out);
                }
            }
            _ => {}
        }
    }

    /// Journaled calls, oldest first.
    pub fn mutations(&self) -> &[Mutation] {
        &self.journal
    }

    pub fn mutation_count(&self) -> usize {
        self.journal.len()
    }

    /// Drain the journal.
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.journal)
    }

    pub fn clear_mutations(&mut self) {
        self.journal.clear();
    }

    pub fn stats(&self) -> MutationStats {
        MutationStats::from_mutations(&self.journal)
    }

    pub(crate) fn get(&self, node: NodeId) -> Option<&HostNode> {
        self.nodes.get(node.index())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut HostNode> {
        self.nodes.get_mut(node.index())
    }

    fn element(&self, node: NodeId) -> Option<&ElementData> {
        self.get(node)?.element()
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        self.get_mut(node)?.element_mut()
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(HostNode::new(data));
        id
    }

    /// Unlink a node from its parent without journaling.
    fn unlink(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(parent) = self.get_mut(parent) {
            parent.children.retain(|&child| child != node);
        }
        if let Some(node) = self.get_mut(node) {
            node.parent = None;
        }
    }

    /// Link a detached node into `parent` before `reference`.
    fn link(&mut self, parent: NodeId, node: NodeId, reference: Option<NodeId>) {
        let Some(parent_node) = self.get_mut(parent) else {
            return;
        };
        let index = reference
            .and_then(|reference| parent_node.children.iter().position(|&c| c == reference))
            .unwrap_or(parent_node.children.len());
        parent_node.children.insert(index, node);
        if let Some(node) = self.get_mut(node) {
            node.parent = Some(parent);
        }
    }

    /// Create detached nodes for a parsed markup node.
    fn build(&mut self, markup: MarkupNode) -> NodeId {
        match markup {
            MarkupNode::Text(text) => self.alloc(NodeData::Text(text)),
            MarkupNode::Comment(text) => self.alloc(NodeData::Comment(text)),
            MarkupNode::Element {
                tag,
                attrs,
                children,
            } => {
                let mut element = ElementData {
                    tag,
                    ..Default::default()
                };
                for (name, value) in attrs {
                    if name == STYLE {
                        element.style = StyleDeclarations::parse(&value);
                    }
                    element.attrs.insert(name, value);
                }
                let id = self.alloc(NodeData::Element(element));
                for child in children {
                    let child = self.build(child);
                    self.link(id, child, None);
                }
                id
            }
        }
    }

    /// Write the serialized inline style back to the `style` attribute.
    ///
    /// Removing the last declaration drops the attribute.
    fn sync_style(element: &mut ElementData) {
        if element.style.is_empty() {
            element.attrs.shift_remove(STYLE);
            return;
        }
        let text = element.style.to_css_text();
        element.attrs.insert(STYLE.into(), text);
    }
}

impl Host for MemoryHost {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        let node = self.alloc(NodeData::Element(ElementData {
            tag: tag.into(),
            ..Default::default()
        }));
        self.journal.push(Mutation::CreateElement {
            node,
            tag: tag.into(),
        });
        node
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        let node = self.alloc(NodeData::Text(text.into()));
        self.journal.push(Mutation::CreateText { node });
        node
    }

    fn create_comment(&mut self, text: &str) -> NodeId {
        let node = self.alloc(NodeData::Comment(text.into()));
        self.journal.push(Mutation::CreateComment { node });
        node
    }

    fn create_fragment(&mut self) -> NodeId {
        let node = self.alloc(NodeData::Fragment);
        self.journal.push(Mutation::CreateFragment { node });
        node
    }

    fn parse_markup(&mut self, markup: &str) -> Vec<NodeId> {
        let parsed = parse_fragment(markup);
        for error in &parsed.errors {
            tracing::warn!(%error, "recovered from malformed markup");
        }
        let nodes: Vec<NodeId> = parsed
            .nodes
            .into_iter()
            .map(|node| self.build(node))
            .collect();
        self.journal.push(Mutation::ParseMarkup {
            nodes: nodes.clone(),
        });
        nodes
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(HostNode {
            data: NodeData::Text(value) | NodeData::Comment(value),
            ..
        }) = self.get_mut(*node)
        {
            *value = text.into();
        }
        self.journal.push(Mutation::SetText {
            node: *node,
            text: text.into(),
        });
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        if let Some(data) = self.element_mut(*element) {
            if name == STYLE {
                data.style = StyleDeclarations::parse(value);
            }
            data.attrs.insert(name.into(), value.into());
        }
        self.journal.push(Mutation::SetAttribute {
            node: *element,
            name: name.into(),
            value: value.into(),
        });
    }

    fn remove_attribute(&mut self, element: &NodeId, name: &str) {
        if let Some(data) = self.element_mut(*element) {
            if data.attrs.shift_remove(name).is_some() && name == STYLE {
                data.style = StyleDeclarations::default();
            }
        }
        self.journal.push(Mutation::RemoveAttribute {
            node: *element,
            name: name.into(),
        });
    }

    fn set_style_property(
        &mut self,
        element: &NodeId,
        name: &str,
        value: &str,
        priority: StylePriority,
    ) {
        if let Some(data) = self.element_mut(*element) {
            if value.is_empty() {
                // An empty value removes the declaration
                if data.style.remove(name) {
                    Self::sync_style(data);
                }
            } else {
                data.style.set(name, value, priority);
                Self::sync_style(data);
            }
        }
        self.journal
            .push(Mutation::set_style_property(*element, name, value, priority));
    }

    fn remove_style_property(&mut self, element: &NodeId, name: &str) {
        if let Some(data) = self.element_mut(*element) {
            if data.style.remove(name) {
                Self::sync_style(data);
            }
        }
        self.journal.push(Mutation::RemoveStyleProperty {
            node: *element,
            name: name.into(),
        });
    }

    fn insert_before(&mut self, parent: &NodeId, node: &NodeId, reference: Option<&NodeId>) {
        self.journal.push(Mutation::InsertBefore {
            parent: *parent,
            node: *node,
            reference: reference.copied(),
        });

        let mut reference = reference.copied();
        if reference.is_some_and(|r| self.parent(r) != Some(*parent)) {
            tracing::warn!(parent = %parent, "reference is not a child of the parent, appending");
            reference = None;
        }

        if self.kind(*node) == Some(HostNodeKind::Fragment) {
            let children = self.get_mut(*node).map(|n| std::mem::take(&mut n.children));
            for child in children.unwrap_or_default() {
                if let Some(child) = self.get_mut(child) {
                    child.parent = None;
                }
                self.link(*parent, child, reference);
            }
            return;
        }

        if reference == Some(*node) {
            // Inserting a node before itself leaves it in place
            return;
        }
        self.unlink(*node);
        self.link(*parent, *node, reference);
    }

    fn remove_child(&mut self, parent: &NodeId, node: &NodeId) {
        if self.parent(*node) == Some(*parent) {
            self.unlink(*node);
        }
        self.journal.push(Mutation::RemoveChild {
            parent: *parent,
            node: *node,
        });
    }

    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.parent(*node)
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(*node)?);
        let index = siblings.iter().position(|sibling| sibling == node)?;
        siblings.get(index + 1).copied()
    }
}
