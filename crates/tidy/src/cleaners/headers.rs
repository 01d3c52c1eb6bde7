// ABOUTME: Repairs renderer defects around h3 method headers.
// ABOUTME: Drops leading stray paragraphs, regathers fragmented inline content, flattens <em> in code.

use crate::dom::select::tag;
use crate::dom::{Document, Node, NodeId};

/// Runs the three header repairs. Returns the number of nodes changed.
pub fn repair_headers(doc: &mut Document) -> usize {
    remove_leading_paragraphs(doc) + rebuild_trailing_paragraphs(doc) + flatten_code_emphasis(doc)
}

/// For each empty `p` directly followed by an `h3`, removes the paragraph
/// right before that `p`. Any other preceding element is kept.
pub fn remove_leading_paragraphs(doc: &mut Document) -> usize {
    let mut doomed = Vec::new();
    for p in doc.select(tag("p")) {
        if !doc.is_empty_element(p) {
            continue;
        }
        let followed_by_h3 = doc
            .next_element_sibling(p)
            .is_some_and(|next| doc.is_tag(next, "h3"));
        if !followed_by_h3 {
            continue;
        }
        if let Some(prev) = doc.prev_element_sibling(p) {
            if doc.is_tag(prev, "p") {
                doomed.push(prev);
            }
        }
    }

    let mut removed = 0;
    for id in doomed {
        if doc.is_attached(id) {
            doc.remove(id);
            removed += 1;
        }
    }
    removed
}

/// Moves inline content that the renderer scattered after an `h3` back into
/// the empty paragraph that follows it.
///
/// Walking backwards from the paragraph, each sibling is moved to the front of
/// the paragraph once its own previous sibling is known not to be a boundary
/// (`h3` or `p`). The node right after the boundary stays where it is.
pub fn rebuild_trailing_paragraphs(doc: &mut Document) -> usize {
    let targets: Vec<NodeId> = doc
        .select(tag("p"))
        .into_iter()
        .filter(|&p| doc.is_empty_element(p) && has_earlier_h3(doc, p))
        .collect();

    let mut moved = 0;
    for p in targets {
        let mut cur = doc.prev_sibling(p);
        while let Some(node) = cur {
            if is_boundary(doc, node) {
                break;
            }
            let prev = doc.prev_sibling(node);
            match prev {
                Some(prev) if !is_boundary(doc, prev) => {
                    doc.prepend_existing(p, node);
                    moved += 1;
                    cur = Some(prev);
                }
                _ => break,
            }
        }
    }
    moved
}

/// Replaces `<em>` inside `h3 code` with literal underscores.
pub fn flatten_code_emphasis(doc: &mut Document) -> usize {
    let mut flattened = 0;
    for h3 in doc.select(tag("h3")) {
        for code in doc.select_within(h3, tag("code")) {
            let ems = doc.select_within(code, tag("em"));
            if ems.is_empty() {
                continue;
            }
            for em in ems {
                doc.insert_before(em, Node::text("_"));
                doc.insert_after(em, Node::text("_"));
                doc.unwrap(em);
                flattened += 1;
            }
            doc.merge_adjacent_text(code);
        }
    }
    flattened
}

fn is_boundary(doc: &Document, id: NodeId) -> bool {
    doc.is_tag(id, "h3") || doc.is_tag(id, "p")
}

fn has_earlier_h3(doc: &Document, id: NodeId) -> bool {
    let mut cur = doc.prev_element_sibling(id);
    while let Some(sibling) = cur {
        if doc.is_tag(sibling, "h3") {
            return true;
        }
        cur = doc.prev_element_sibling(sibling);
    }
    false
}
