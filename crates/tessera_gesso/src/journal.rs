//! Mutation journal.

use serde::Serialize;
use tessera_carton::CompactString;
use tessera_relief::StylePriority;

use crate::node::NodeId;

/// One call made on a [`MemoryHost`](crate::MemoryHost) through the host
/// interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    CreateElement {
        node: NodeId,
        tag: CompactString,
    },
    CreateText {
        node: NodeId,
    },
    CreateComment {
        node: NodeId,
    },
    CreateFragment {
        node: NodeId,
    },
    ParseMarkup {
        nodes: Vec<NodeId>,
    },
    SetText {
        node: NodeId,
        text: CompactString,
    },
    SetAttribute {
        node: NodeId,
        name: CompactString,
        value: CompactString,
    },
    RemoveAttribute {
        node: NodeId,
        name: CompactString,
    },
    SetStyleProperty {
        node: NodeId,
        name: CompactString,
        value: CompactString,
        important: bool,
    },
    RemoveStyleProperty {
        node: NodeId,
        name: CompactString,
    },
    InsertBefore {
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    },
    RemoveChild {
        parent: NodeId,
        node: NodeId,
    },
}

impl Mutation {
    pub(crate) fn set_style_property(
        node: NodeId,
        name: &str,
        value: &str,
        priority: StylePriority,
    ) -> Self {
        Self::SetStyleProperty {
            node,
            name: name.into(),
            value: value.into(),
            important: priority.is_important(),
        }
    }

    /// Whether the mutation creates a node.
    pub fn is_creation(&self) -> bool {
        matches!(
            self,
            Self::CreateElement { .. }
                | Self::CreateText { .. }
                | Self::CreateComment { .. }
                | Self::CreateFragment { .. }
                | Self::ParseMarkup { .. }
        )
    }

    /// Whether the mutation changes the shape of the tree.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::InsertBefore { .. } | Self::RemoveChild { .. })
    }
}

/// Counts of journaled mutations by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationStats {
    pub created: usize,
    pub inserted: usize,
    pub removed: usize,
    pub text_changes: usize,
    pub attribute_changes: usize,
    pub style_changes: usize,
}

impl MutationStats {
    pub fn from_mutations(mutations: &[Mutation]) -> Self {
        let mut stats = Self::default();
        for mutation in mutations {
            match mutation {
                Mutation::CreateElement { .. }
                | Mutation::CreateText { .. }
                | Mutation::CreateComment { .. }
                | Mutation::CreateFragment { .. } => stats.created += 1,
                Mutation::ParseMarkup { nodes } => stats.created += nodes.len(),
                Mutation::InsertBefore { .. } => stats.inserted += 1,
                Mutation::RemoveChild { .. } => stats.removed += 1,
                Mutation::SetText { .. } => stats.text_changes += 1,
                Mutation::SetAttribute { .. } | Mutation::RemoveAttribute { .. } => {
                    stats.attribute_changes += 1
                }
                Mutation::SetStyleProperty { .. } | Mutation::RemoveStyleProperty { .. } => {
                    stats.style_changes += 1
                }
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.created
            + self.inserted
            + self.removed
            + self.text_changes
            + self.attribute_changes
            + self.style_changes
    }
}
