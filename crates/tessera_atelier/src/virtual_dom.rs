//! Reconciler entry points.

use tessera_carton::FxHashMap;
use tessera_relief::{Host, VNode, VNodeId};

use crate::error::{AtelierError, AtelierResult};
use crate::options::VirtualDomOptions;

/// Where a root was appended.
#[derive(Debug, Clone)]
pub(crate) struct Slot<N> {
    pub(crate) container: N,
    pub(crate) before: Option<N>,
}

/// Host range a node's children are reconciled in.
///
/// `tail` is the host node following the range, `None` when the range runs to
/// the end of `parent`.
#[derive(Debug, Clone)]
pub(crate) struct Range<N> {
    pub(crate) parent: N,
    pub(crate) tail: Option<N>,
}

impl<N> Range<N> {
    pub(crate) fn new(parent: N, tail: Option<N>) -> Self {
        Self { parent, tail }
    }
}

/// Renders virtual trees onto a host and keeps them in sync.
///
/// The instance owns the host and the host-to-virtual binding table. Mounted
/// trees are handed back to the caller, who passes them in again on the next
/// `update` or `remove`.
pub struct VirtualDom<H: Host> {
    pub(crate) host: H,
    pub(crate) options: VirtualDomOptions,
    /// Host node to owning virtual node (text, comment and element only)
    pub(crate) bindings: FxHashMap<H::Node, VNodeId>,
    /// Mounted roots by id
    pub(crate) roots: FxHashMap<VNodeId, Slot<H::Node>>,
    next_id: u64,
}

impl<H: Host> VirtualDom<H> {
    /// Create a reconciler over a host.
    pub fn new(host: H) -> Self {
        Self::with_options(host, VirtualDomOptions::default())
    }

    /// Create a reconciler with options.
    pub fn with_options(host: H, options: VirtualDomOptions) -> Self {
        Self {
            host,
            options,
            bindings: FxHashMap::default(),
            roots: FxHashMap::default(),
            next_id: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn options(&self) -> &VirtualDomOptions {
        &self.options
    }

    /// Virtual node bound to a host node, if any.
    pub fn bound_node_of(&self, node: &H::Node) -> Option<VNodeId> {
        self.bindings.get(node).copied()
    }

    /// Number of mounted roots.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Mount a tree into `container`, before `insert_before` or at the end.
    pub fn append(
        &mut self,
        container: &H::Node,
        node: impl Into<VNode<H::Node>>,
        insert_before: Option<&H::Node>,
    ) -> AtelierResult<VNode<H::Node>> {
        let node = node.into();
        if node.is_mounted() {
            return Err(AtelierError::PreconditionViolation(
                "append of an already mounted node",
            ));
        }
        if self.options.check_preconditions && has_mounted_descendant(&node) {
            return Err(AtelierError::PreconditionViolation(
                "append of a tree holding mounted nodes",
            ));
        }

        tracing::debug!(tag = ?node.tag(), "append");
        let node = self.mount(node, container, insert_before);
        if let Some(first) = node.first_host_node().cloned() {
            // Roots that sat right before the insertion point now precede it
            self.repoint(container, insert_before, Some(&first));
        }
        if let Some(id) = node.id {
            self.roots.insert(
                id,
                Slot {
                    container: container.clone(),
                    before: insert_before.cloned(),
                },
            );
        }
        Ok(node)
    }

    /// Reconcile a mounted root against a new tree for the same position.
    ///
    /// Passing a clone of the mounted root as `next` performs no host
    /// mutation.
    pub fn update(
        &mut self,
        old: VNode<H::Node>,
        next: impl Into<VNode<H::Node>>,
    ) -> AtelierResult<VNode<H::Node>> {
        let next = next.into();
        let id = old.id.ok_or(AtelierError::PreconditionViolation(
            "update of an unmounted node",
        ))?;

        if next.is_mounted() {
            if next.id == Some(id) {
                tracing::debug!(root = %id, "update skipped, tree unchanged");
                return Ok(next);
            }
            return Err(AtelierError::PreconditionViolation(
                "update with a next tree that is mounted elsewhere",
            ));
        }
        if self.options.check_preconditions && has_mounted_descendant(&next) {
            return Err(AtelierError::PreconditionViolation(
                "update with a next tree holding mounted nodes",
            ));
        }

        let slot = self.slot_of(id, &old)?;
        tracing::debug!(root = %id, tag = ?next.tag(), "update");

        let tail = self.root_tail(&old, &slot);
        let old_first = old.first_host_node().cloned();
        let range = Range::new(slot.container.clone(), tail.clone());
        let node = if old.tag() == next.tag() && old.key == next.key {
            self.patch(old, next, &range)
        } else {
            let anchor = old.first_host_node().cloned().or(range.tail);
            let node = self.mount(next, &slot.container, anchor.as_ref());
            self.unmount(old);
            node
        };

        self.roots.remove(&id);
        if let Some(old_first) = &old_first {
            let new_first = node.first_host_node().or(tail.as_ref()).cloned();
            self.repoint(&slot.container, Some(old_first), new_first.as_ref());
        }
        if let Some(new_id) = node.id {
            self.roots.insert(
                new_id,
                Slot {
                    container: slot.container,
                    before: tail,
                },
            );
        }
        Ok(node)
    }

    /// Tear down a mounted root, restoring its container.
    pub fn remove(&mut self, node: VNode<H::Node>) -> AtelierResult<()> {
        let id = node.id.ok_or(AtelierError::PreconditionViolation(
            "remove of an unmounted node",
        ))?;
        let slot = self.slot_of(id, &node)?;

        tracing::debug!(root = %id, tag = ?node.tag(), "remove");
        self.roots.remove(&id);
        let tail = self.root_tail(&node, &slot);
        let first = node.first_host_node().cloned();
        self.unmount(node);
        if let Some(first) = &first {
            self.repoint(&slot.container, Some(first), tail.as_ref());
        }
        Ok(())
    }

    pub(crate) fn alloc_id(&mut self) -> VNodeId {
        let id = VNodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registered slot of a root, or one recovered from the host when checks
    /// are off.
    fn slot_of(&self, id: VNodeId, node: &VNode<H::Node>) -> AtelierResult<Slot<H::Node>> {
        if let Some(slot) = self.roots.get(&id) {
            return Ok(slot.clone());
        }
        if self.options.check_preconditions {
            return Err(AtelierError::PreconditionViolation(
                "node is not a mounted root of this instance",
            ));
        }
        node.first_host_node()
            .and_then(|first| self.host.parent_of(first))
            .map(|container| Slot {
                container,
                before: None,
            })
            .ok_or(AtelierError::PreconditionViolation(
                "position of the node cannot be recovered",
            ))
    }

    /// Host node following a root.
    ///
    /// Read from the host while the root owns host nodes. An empty root falls
    /// back to its registered reference.
    fn root_tail(&self, node: &VNode<H::Node>, slot: &Slot<H::Node>) -> Option<H::Node> {
        match node.last_host_node() {
            Some(last) => self.host.next_sibling(last),
            None => self.live_reference(slot),
        }
    }

    /// Move the references of roots in `container` from `from` to `to`.
    ///
    /// Called whenever the host node right after those roots changes, so an
    /// empty root keeps its position among its siblings.
    fn repoint(&mut self, container: &H::Node, from: Option<&H::Node>, to: Option<&H::Node>) {
        if from == to {
            return;
        }
        for slot in self.roots.values_mut() {
            if &slot.container == container && slot.before.as_ref() == from {
                slot.before = to.cloned();
            }
        }
    }

    /// The slot's insertion reference, dropped once it left the container.
    fn live_reference(&self, slot: &Slot<H::Node>) -> Option<H::Node> {
        slot.before
            .as_ref()
            .filter(|before| self.host.parent_of(before).as_ref() == Some(&slot.container))
            .cloned()
    }
}

fn has_mounted_descendant<N>(node: &VNode<N>) -> bool {
    node.is_mounted() || node.children.iter().any(has_mounted_descendant)
}
