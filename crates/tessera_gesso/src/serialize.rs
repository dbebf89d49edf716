//! HTML serialization.

use tessera_carton::{is_raw_text_tag, is_void_tag};

use crate::host::MemoryHost;
use crate::node::{NodeData, NodeId};

impl MemoryHost {
    /// Serialize the children of a node.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        let raw = self.tag(node).is_some_and(is_raw_text_tag);
        for &child in self.children(node) {
            self.write_node(child, raw, &mut out);
        }
        out
    }

    /// Serialize a node and its subtree.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, false, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, raw_text: bool, out: &mut String) {
        let Some(host_node) = self.get(node) else {
            return;
        };

        match &host_node.data {
            NodeData::Text(text) if raw_text => out.push_str(text),
            NodeData::Text(text) => out.push_str(&htmlize::escape_text(text.as_str())),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Fragment => {
                for &child in &host_node.children {
                    self.write_node(child, raw_text, out);
                }
            }
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&htmlize::escape_attribute(value.as_str()));
                    out.push('"');
                }
                out.push('>');

                if is_void_tag(&element.tag) {
                    return;
                }

                let raw = is_raw_text_tag(&element.tag);
                for &child in &host_node.children {
                    self.write_node(child, raw, out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }
}
