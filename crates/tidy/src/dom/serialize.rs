// ABOUTME: HTML serialization for the document arena.
// ABOUTME: Emits inner HTML with escaped text and attributes and self-closing void tags.

use ego_tree::{NodeId, NodeRef};

use super::node::Node;
use super::tree::Document;

impl Document {
    /// Serializes the content region (the root's children).
    pub fn to_html(&self) -> String {
        self.inner_html(self.root())
    }

    /// Serializes the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(node) = self.tree().get(id) {
            let raw = is_raw_text(node);
            for child in node.children() {
                serialize_node(child, raw, &mut out);
            }
        }
        out
    }
}

fn serialize_node(node: NodeRef<Node>, raw_text: bool, out: &mut String) {
    match node.value() {
        Node::Text(t) => {
            if raw_text {
                out.push_str(t);
            } else {
                out.push_str(&escape_text(t));
            }
        }
        Node::Element(el) => {
            let name = el.name();
            out.push('<');
            out.push_str(name);
            for (k, v) in el.attrs() {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(v));
                out.push('"');
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            let raw = is_raw_text(node);
            for child in node.children() {
                serialize_node(child, raw, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn is_raw_text(node: NodeRef<Node>) -> bool {
    node.value().is_tag("script") || node.value().is_tag("style")
}

/// Escape attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Check if tag is void element
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
