//! Teardown of mounted trees.

use tessera_relief::{Binding, Host, NodeKind, VNode};

use crate::virtual_dom::VirtualDom;

impl<H: Host> VirtualDom<H> {
    /// Unbind a mounted tree and detach its host nodes, children first.
    pub(crate) fn unmount(&mut self, node: VNode<H::Node>) {
        let VNode {
            kind,
            children,
            binding,
            id,
            ..
        } = node;
        tracing::trace!(id = ?id, tag = ?kind.tag(), "unmount");

        if let Binding::Node(host_node) = &binding {
            self.bindings.remove(host_node);
        }

        for child in children {
            self.unmount(child);
        }

        match binding {
            Binding::Tracking(nodes) => {
                for host_node in &nodes {
                    self.detach(host_node);
                }
            }
            Binding::Node(host_node) if !matches!(kind, NodeKind::Fragment) => {
                self.detach(&host_node);
            }
            _ => {}
        }
    }

    /// Remove a host node from its parent, if it has one.
    pub(crate) fn detach(&mut self, host_node: &H::Node) {
        if let Some(parent) = self.host.parent_of(host_node) {
            self.host.remove_child(&parent, host_node);
        }
    }
}
