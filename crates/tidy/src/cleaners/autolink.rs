// ABOUTME: Autolinks bare method references like `_.map` inside documentation containers.
// ABOUTME: Replaces the code element with <a href="#map"><code>_.map</code></a>.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::select::{class, tag};
use crate::dom::{Document, Element, Node};
use crate::options::Options;

static METHOD_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^_\.([A-Za-z0-9_]+)$").unwrap());

/// Links every qualifying code element. Returns the number of links created.
pub fn auto_link(doc: &mut Document, opts: &Options) -> usize {
    let mut linked = 0;

    for container in doc.select(class(&opts.doc_container_class)) {
        for code in doc.select_within(container, tag("code")) {
            // Nested containers visit the same code twice.
            if !doc.is_attached(code) {
                continue;
            }
            if doc.parent(code).is_some_and(|p| doc.is_tag(p, "a")) {
                continue;
            }
            if !doc.element_children(code).is_empty() {
                continue;
            }
            let text = doc.text(code);
            let Some(ident) = METHOD_REF_RE.captures(&text).map(|c| c[1].to_string()) else {
                continue;
            };
            let href = format!("#{}", ident);

            let anchor = Node::Element(Element::new("a").with_attr("href", href));
            let Some(anchor) = doc.replace(code, anchor) else {
                continue;
            };
            if let Some(inner) = doc.append(anchor, Node::element("code")) {
                doc.append(inner, Node::Text(text));
            }
            log::trace!("autolinked _.{}", ident);
            linked += 1;
        }
    }

    linked
}
