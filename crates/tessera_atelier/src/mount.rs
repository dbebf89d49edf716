//! Mounting unbound trees onto the host.

use tessera_carton::SmallVec;
use tessera_relief::{Binding, Host, NodeKind, VNode, VNodeId};

use crate::attrs;
use crate::virtual_dom::VirtualDom;

impl<H: Host> VirtualDom<H> {
    /// Create host nodes for an unbound tree and insert them into `parent`
    /// before `before`.
    ///
    /// Every node of the tree receives a fresh id. Children are created before
    /// their element is inserted, so an element reaches the host tree complete.
    pub(crate) fn mount(
        &mut self,
        mut node: VNode<H::Node>,
        parent: &H::Node,
        before: Option<&H::Node>,
    ) -> VNode<H::Node> {
        let id = self.alloc_id();
        node.id = Some(id);
        tracing::trace!(id = %id, tag = ?node.tag(), "mount");

        match &node.kind {
            NodeKind::Text(value) => {
                let text = self.host.create_text(value);
                node.binding = self.attach(text, id, parent, before);
            }
            NodeKind::Comment(value) => {
                let comment = self.host.create_comment(value);
                node.binding = self.attach(comment, id, parent, before);
            }
            NodeKind::RawMarkup(markup) => {
                let nodes = self.host.parse_markup(markup);
                for host_node in &nodes {
                    self.host.insert_before(parent, host_node, before);
                }
                node.binding = Binding::Tracking(SmallVec::from_vec(nodes));
            }
            NodeKind::Element { tag, attrs } => {
                let element = self.host.create_element(tag);
                if let Some(attrs) = attrs {
                    attrs::apply_attrs(&mut self.host, &element, attrs);
                }
                let children = std::mem::take(&mut node.children);
                node.children = self.mount_children(children, &element, None);
                node.binding = self.attach(element, id, parent, before);
            }
            NodeKind::Fragment => {
                let children = std::mem::take(&mut node.children);
                node.children = self.mount_children(children, parent, before);
            }
        }

        node
    }

    /// Mount a list of siblings with a single insertion into `parent`.
    ///
    /// Several siblings are collected in a host fragment first.
    pub(crate) fn mount_children(
        &mut self,
        children: Vec<VNode<H::Node>>,
        parent: &H::Node,
        before: Option<&H::Node>,
    ) -> Vec<VNode<H::Node>> {
        if children.len() < 2 {
            return children
                .into_iter()
                .map(|child| self.mount(child, parent, before))
                .collect();
        }

        let batch = self.host.create_fragment();
        let mounted = children
            .into_iter()
            .map(|child| self.mount(child, &batch, None))
            .collect();
        self.host.insert_before(parent, &batch, before);
        mounted
    }

    /// Bind a created host node and insert it.
    fn attach(
        &mut self,
        host_node: H::Node,
        id: VNodeId,
        parent: &H::Node,
        before: Option<&H::Node>,
    ) -> Binding<H::Node> {
        self.bindings.insert(host_node.clone(), id);
        self.host.insert_before(parent, &host_node, before);
        Binding::Node(host_node)
    }
}
