//! Tree diff and patch.
//!
//! Children are reconciled in a single left-to-right pass. Each next child is
//! compared against the current old slot:
//!
//! - same tag and same key (or both unkeyed): the old node is patched in place
//!   and the old cursor advances;
//! - otherwise, if a later unconsumed old sibling has the same key and tag, its
//!   host nodes are moved into place and it is patched;
//! - otherwise the next child is mounted fresh before the current anchor.
//!
//! The old cursor only advances on an in-place match, so one old slot can be
//! retried against several next children. Every step consumes a next child,
//! which bounds the pass. Old children left unmatched when the next list runs
//! out are removed, and next children left over once the old list is consumed
//! are batch-mounted at the end of the range.

use std::mem;

use tessera_carton::{FxHashMap, SmallVec};
use tessera_relief::{Binding, Host, Key, NodeKind, VNode};

use crate::attrs;
use crate::virtual_dom::{Range, VirtualDom};

type Slots<N> = Vec<Option<VNode<N>>>;

impl<H: Host> VirtualDom<H> {
    /// Patch a mounted node in place from a node of the same tag.
    ///
    /// `range` is the host range the node lives in; its tail is the first host
    /// node after the node itself.
    pub(crate) fn patch(
        &mut self,
        mut old: VNode<H::Node>,
        mut next: VNode<H::Node>,
        range: &Range<H::Node>,
    ) -> VNode<H::Node> {
        if old.node_type() != next.node_type() {
            return self.replace(old, next, range);
        }

        next.id = old.id;
        tracing::trace!(id = ?next.id, tag = ?next.tag(), "patch");

        match (&old.kind, &next.kind) {
            (NodeKind::Text(prev), NodeKind::Text(value))
            | (NodeKind::Comment(prev), NodeKind::Comment(value)) => {
                next.binding = old.binding.take();
                if prev != value {
                    if let Some(host_node) = next.binding.node() {
                        self.host.set_text(host_node, value);
                    }
                }
            }
            (NodeKind::RawMarkup(prev), NodeKind::RawMarkup(markup)) => {
                let binding = old.binding.take();
                next.binding = if prev == markup {
                    binding
                } else {
                    self.replace_markup(binding, markup, range)
                };
            }
            (NodeKind::Element { attrs: prev, .. }, NodeKind::Element { attrs: next_attrs, .. }) => {
                next.binding = old.binding.take();
                if let Some(element) = next.binding.node().cloned() {
                    attrs::diff_attrs(
                        &mut self.host,
                        &element,
                        prev.as_ref(),
                        next_attrs.as_ref(),
                    );
                    let children = mem::take(&mut old.children);
                    let next_children = mem::take(&mut next.children);
                    next.children =
                        self.patch_children(children, next_children, &Range::new(element, None));
                }
            }
            (NodeKind::Fragment, NodeKind::Fragment) => {
                let children = mem::take(&mut old.children);
                let next_children = mem::take(&mut next.children);
                next.children = self.patch_children(children, next_children, range);
            }
            _ => {}
        }

        next
    }

    /// Reconcile the children of a container.
    pub(crate) fn patch_children(
        &mut self,
        old: Vec<VNode<H::Node>>,
        next: Vec<VNode<H::Node>>,
        range: &Range<H::Node>,
    ) -> Vec<VNode<H::Node>> {
        if old.is_empty() {
            return self.mount_children(next, &range.parent, range.tail.as_ref());
        }

        let keys = KeyIndex::new(&old);
        let mut old: Slots<H::Node> = old.into_iter().map(Some).collect();
        let mut patched = Vec::with_capacity(next.len());
        let mut rest = Vec::new();
        let mut i = 0;

        for child in next {
            while matches!(old.get(i), Some(None)) {
                i += 1;
            }
            let Some(Some(current)) = old.get(i) else {
                rest.push(child);
                continue;
            };

            if current.tag() == child.tag() && current.key == child.key {
                let tail = anchor(&old, i + 1, range);
                if let Some(current) = old[i].take() {
                    let range = Range::new(range.parent.clone(), tail);
                    patched.push(self.patch(current, child, &range));
                }
                i += 1;
                continue;
            }

            if let Some(moved) = keys.find(&old, &child, i + 1).and_then(|k| old[k].take()) {
                // Anchor computed without the moved node, so it lands right
                // after what is already patched
                let before = anchor(&old, i, range);
                tracing::trace!(id = ?moved.id, key = ?child.key, "move keyed node");
                self.move_before(&moved, &range.parent, before.as_ref());
                let range = Range::new(range.parent.clone(), before);
                patched.push(self.patch(moved, child, &range));
                continue;
            }

            let before = anchor(&old, i, range);
            tracing::trace!(tag = ?child.tag(), key = ?child.key, "insert");
            patched.push(self.mount(child, &range.parent, before.as_ref()));
        }

        if !rest.is_empty() {
            let mounted = self.mount_children(rest, &range.parent, range.tail.as_ref());
            patched.extend(mounted);
        }

        for stale in old.into_iter().flatten() {
            self.unmount(stale);
        }

        patched
    }

    /// Mount `next` where `old` is and tear `old` down.
    fn replace(
        &mut self,
        old: VNode<H::Node>,
        next: VNode<H::Node>,
        range: &Range<H::Node>,
    ) -> VNode<H::Node> {
        let anchor = old
            .first_host_node()
            .cloned()
            .or_else(|| range.tail.clone());
        let node = self.mount(next, &range.parent, anchor.as_ref());
        self.unmount(old);
        node
    }

    /// Swap the host nodes of a raw markup span for a fresh parse.
    fn replace_markup(
        &mut self,
        binding: Binding<H::Node>,
        markup: &str,
        range: &Range<H::Node>,
    ) -> Binding<H::Node> {
        let stale: Vec<H::Node> = binding.iter().cloned().collect();
        let parent = stale
            .first()
            .and_then(|first| self.host.parent_of(first))
            .unwrap_or_else(|| range.parent.clone());
        let reference = stale.first().cloned().or_else(|| range.tail.clone());

        let nodes = self.host.parse_markup(markup);
        for host_node in &nodes {
            self.host.insert_before(&parent, host_node, reference.as_ref());
        }
        for host_node in &stale {
            self.detach(host_node);
        }

        Binding::Tracking(SmallVec::from_vec(nodes))
    }

    /// Move the top-level host nodes of a mounted node before `anchor`.
    fn move_before(&mut self, node: &VNode<H::Node>, parent: &H::Node, anchor: Option<&H::Node>) {
        let mut host_nodes = Vec::new();
        node.collect_host_nodes(&mut host_nodes);
        for host_node in &host_nodes {
            self.host.insert_before(parent, host_node, anchor);
        }
    }
}

/// First live host node among the untaken old slots from `from` on, falling
/// back to the range tail.
fn anchor<N: Clone>(old: &[Option<VNode<N>>], from: usize, range: &Range<N>) -> Option<N> {
    old.get(from..)
        .into_iter()
        .flatten()
        .flatten()
        .find_map(VNode::first_host_node)
        .cloned()
        .or_else(|| range.tail.clone())
}

/// Positions of keyed old children.
struct KeyIndex {
    positions: FxHashMap<Key, SmallVec<[usize; 1]>>,
}

impl KeyIndex {
    fn new<N>(children: &[VNode<N>]) -> Self {
        let mut positions: FxHashMap<Key, SmallVec<[usize; 1]>> = FxHashMap::default();
        for (index, child) in children.iter().enumerate() {
            if let Some(key) = &child.key {
                positions.entry(key.clone()).or_default().push(index);
            }
        }
        Self { positions }
    }

    /// Unconsumed old slot at or after `from` with the key and tag of `child`.
    fn find<N>(&self, old: &[Option<VNode<N>>], child: &VNode<N>, from: usize) -> Option<usize> {
        let key = child.key.as_ref()?;
        self.positions.get(key)?.iter().copied().find(|&index| {
            index >= from
                && old[index]
                    .as_ref()
                    .is_some_and(|candidate| candidate.tag() == child.tag())
        })
    }
}
