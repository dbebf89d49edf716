//! Gesso - The in-memory host ground for Tessera.
//!
//! [`MemoryHost`] implements [`Host`](tessera_relief::Host) over an arena of
//! nodes. It behaves like a DOM where it matters to a reconciler (inserting
//! a fragment moves its children, inline style is a declaration list, raw
//! markup is parsed into real nodes) and serializes to HTML. Every call made
//! through the host interface is recorded in a mutation journal.
//!
//! ```
//! use tessera_gesso::MemoryHost;
//! use tessera_relief::{Host, StylePriority};
//!
//! let mut host = MemoryHost::new();
//! let div = host.create_element("div");
//! host.set_style_property(&div, "border", "0 none", StylePriority::Normal);
//!
//! assert_eq!(host.outer_html(div), r#"<div style="border: 0px none;"></div>"#);
//! assert_eq!(host.mutation_count(), 2);
//! ```

pub mod error;
mod host;
pub mod journal;
pub mod markup;
pub mod node;
mod serialize;
pub mod style;

pub use error::GessoError;
pub use host::MemoryHost;
pub use journal::{Mutation, MutationStats};
pub use markup::{parse_fragment, MarkupNode, ParsedFragment};
pub use node::{HostNodeKind, NodeId};
pub use style::StyleDeclarations;
