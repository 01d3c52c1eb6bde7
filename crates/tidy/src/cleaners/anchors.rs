// ABOUTME: Renames the configured anchor id and every href pointing at it.
// ABOUTME: A two-literal rename (default "_" -> "lodash"), not a general id rewriter.

use crate::dom::select::attr_eq;
use crate::dom::Document;
use crate::options::AnchorRename;

/// Returns the number of attributes rewritten.
pub fn rename_anchor(doc: &mut Document, rename: &AnchorRename) -> usize {
    let old_href = format!("#{}", rename.from);
    let new_href = format!("#{}", rename.to);

    let ids = doc.select(attr_eq("id", &rename.from));
    for &id in &ids {
        doc.update_element(id, |el| el.set_attr("id", rename.to.as_str()));
    }

    let links = doc.select(attr_eq("href", &old_href));
    for &link in &links {
        doc.update_element(link, |el| el.set_attr("href", new_href.as_str()));
    }

    ids.len() + links.len()
}
