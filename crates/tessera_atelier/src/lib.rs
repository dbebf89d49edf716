//! Atelier - The reconciliation workshop for Tessera.
//!
//! [`VirtualDom`] mounts virtual trees onto any [`Host`](tessera_relief::Host)
//! and keeps the host in sync as the trees change, touching only what
//! differs.
//!
//! ```
//! use tessera_atelier::VirtualDom;
//! use tessera_gesso::MemoryHost;
//! use tessera_relief::{Host, VNode};
//!
//! let mut host = MemoryHost::new();
//! let root = host.create_element("main");
//! let mut dom = VirtualDom::new(host);
//!
//! let tree = dom
//!     .append(&root, VNode::element("p").with_child(VNode::text("Hi")), None)
//!     .unwrap();
//! let tree = dom
//!     .update(tree, VNode::element("p").with_child(VNode::text("Bye")))
//!     .unwrap();
//! assert_eq!(dom.host().inner_html(root), "<p>Bye</p>");
//!
//! dom.remove(tree).unwrap();
//! assert_eq!(dom.host().inner_html(root), "");
//! ```

pub mod attrs;
mod diff;
pub mod error;
mod mount;
pub mod options;
mod remove;
mod virtual_dom;

pub use error::{AtelierError, AtelierResult};
pub use options::VirtualDomOptions;
pub use virtual_dom::VirtualDom;
