//! Host tree collaborator.
//!
//! The reconciler never touches a concrete tree. Everything it does to the
//! outside world goes through this trait, so the same engine drives a DOM,
//! an in-memory arena, or a terminal buffer.

use std::fmt::Debug;
use std::hash::Hash;

/// Priority of a single style declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StylePriority {
    #[default]
    Normal,
    Important,
}

impl StylePriority {
    /// The priority string used by CSSOM (`""` or `"important"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Important => "important",
        }
    }

    #[inline]
    pub fn is_important(self) -> bool {
        matches!(self, Self::Important)
    }
}

/// Mutable host tree.
///
/// Node handles are cheap to clone and compare by identity. Every operation is
/// total over a well-formed tree: removing an absent attribute or property is a
/// no-op.
pub trait Host {
    /// Handle of a host node
    type Node: Clone + Eq + Hash + Debug;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Create a detached text node.
    fn create_text(&mut self, text: &str) -> Self::Node;

    /// Create a detached comment node.
    fn create_comment(&mut self, text: &str) -> Self::Node;

    /// Create a detached fragment used as a batch insertion container.
    ///
    /// Inserting a fragment moves its children into the target and leaves the
    /// fragment empty.
    fn create_fragment(&mut self) -> Self::Node;

    /// Parse a markup fragment into detached top-level sibling nodes.
    fn parse_markup(&mut self, markup: &str) -> Vec<Self::Node>;

    /// Overwrite the content of a text or comment node.
    fn set_text(&mut self, node: &Self::Node, text: &str);

    fn set_attribute(&mut self, element: &Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, element: &Self::Node, name: &str);

    /// Fast path for `id`.
    fn set_id(&mut self, element: &Self::Node, id: &str) {
        self.set_attribute(element, "id", id);
    }

    /// Fast path for `class`.
    fn set_class_name(&mut self, element: &Self::Node, class_name: &str) {
        self.set_attribute(element, "class", class_name);
    }

    fn set_style_property(
        &mut self,
        element: &Self::Node,
        name: &str,
        value: &str,
        priority: StylePriority,
    );

    fn remove_style_property(&mut self, element: &Self::Node, name: &str);

    /// Insert `node` into `parent` before `reference`, or at the end when
    /// `reference` is `None`. An attached node is moved.
    fn insert_before(
        &mut self,
        parent: &Self::Node,
        node: &Self::Node,
        reference: Option<&Self::Node>,
    );

    fn append_child(&mut self, parent: &Self::Node, node: &Self::Node) {
        self.insert_before(parent, node, None);
    }

    fn remove_child(&mut self, parent: &Self::Node, node: &Self::Node);

    /// Current parent of a node.
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Sibling following a node in its parent, `None` for the last child or a
    /// detached node.
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;
}
