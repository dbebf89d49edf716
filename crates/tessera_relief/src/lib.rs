//! Relief - The sculptured node surface for Tessera.
//!
//! This crate defines the virtual node model that the reconciler works on,
//! the literal description grammar authors write, the normalizer that turns
//! one into the other, and the [`Host`] trait every host tree implements.
//!
//! ```
//! use tessera_relief::{Description, NodeType, VNode};
//!
//! let description: Description = serde_json::from_str(
//!     r#"{"tag": "ul", "children": [{"tag": "li", "key": 0, "children": "t0"}]}"#,
//! ).unwrap();
//!
//! let node: VNode<u32> = description.normalize();
//! assert_eq!(node.node_type(), NodeType::Element);
//! assert_eq!(node.children[0].children[0].value(), Some("t0"));
//! ```

pub mod attr;
pub mod description;
pub mod host;
pub mod node;

pub use attr::{AttrValue, Attrs, StyleMap};
pub use description::{Child, Children, Description};
pub use host::{Host, StylePriority};
pub use node::{Binding, FloatKey, Key, NodeKind, NodeType, VNode, VNodeId};
