// ABOUTME: Strips attributes injected by the markdown renderer.
// ABOUTME: Clears prefixed ids (with their classes) and unwraps self-links in non-h3 headings.

use crate::dom::select::{and, attr_prefix, heading, heading_level, not};
use crate::dom::{Document, NodeId};
use crate::options::Options;

/// Runs both stripping rules. Returns the number of elements changed.
pub fn strip_renderer_attributes(doc: &mut Document, opts: &Options) -> usize {
    strip_prefixed_ids(doc, &opts.renderer_id_prefix) + unwrap_heading_links(doc)
}

/// Removes `id` and `class` from every element whose id carries the renderer prefix.
pub fn strip_prefixed_ids(doc: &mut Document, prefix: &str) -> usize {
    if prefix.is_empty() {
        return 0;
    }
    let targets = doc.select(attr_prefix("id", prefix));
    for &id in &targets {
        doc.update_element(id, |el| {
            el.remove_attr("class");
            el.remove_attr("id");
        });
    }
    targets.len()
}

/// Unwraps an anchor that is the only child of an h1/h2/h4/h5/h6. Level-3
/// headings keep their anchors for the header repair pass.
pub fn unwrap_heading_links(doc: &mut Document) -> usize {
    let headings = doc.select(and(heading, not(heading_level(3))));
    let mut unwrapped = 0;
    for h in headings {
        if let Some(anchor) = sole_anchor(doc, h) {
            doc.unwrap(anchor);
            unwrapped += 1;
        }
    }
    unwrapped
}

fn sole_anchor(doc: &Document, heading: NodeId) -> Option<NodeId> {
    let mut found = None;
    for child in doc.children(heading) {
        let node = doc.get(child)?;
        if node.value().is_blank_text() {
            continue;
        }
        if found.is_some() || !node.value().is_tag("a") {
            return None;
        }
        found = Some(child);
    }
    found
}
