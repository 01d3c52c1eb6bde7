// ABOUTME: Imports an HTML fragment parsed by scraper into the document arena.
// ABOUTME: Keeps elements and text; comments, doctypes and processing instructions are dropped.

use ego_tree::NodeRef;
use scraper::Html;

use super::node::{Element, Node};
use super::tree::Document;

impl Document {
    /// Parses rendered HTML as a body fragment.
    pub fn parse_fragment(html: &str) -> Self {
        let fragment = Html::parse_fragment(html);
        let mut doc = Document::new();
        let root = doc.root();

        // The fragment root is a synthetic <html> element; its children are
        // the rendered content.
        for child in fragment.root_element().children() {
            import_node(&mut doc, root, child);
        }
        doc
    }
}

fn import_node(doc: &mut Document, parent: ego_tree::NodeId, node: NodeRef<scraper::Node>) {
    match node.value() {
        scraper::Node::Text(text) => {
            doc.append(parent, Node::Text((**text).to_owned()));
        }
        scraper::Node::Element(el) => {
            let mut element = Element::new(el.name());
            for (name, value) in el.attrs() {
                element.set_attr(name, value);
            }
            let Some(id) = doc.append(parent, Node::Element(element)) else {
                return;
            };
            for child in node.children() {
                import_node(doc, id, child);
            }
        }
        _ => log::trace!("dropping non-content node"),
    }
}
