// ABOUTME: Removes horizontal rules anywhere in the document.
// ABOUTME: Adjacent empty paragraphs are left for the header repair pass.

use crate::dom::select::tag;
use crate::dom::Document;

/// Removes every `hr`. Returns how many were removed.
pub fn remove_horizontal_rules(doc: &mut Document) -> usize {
    let rules = doc.select(tag("hr"));
    for &hr in &rules {
        doc.remove(hr);
    }
    rules.len()
}
