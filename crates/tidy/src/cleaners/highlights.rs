// ABOUTME: Normalizes syntax-highlighted code blocks produced by the renderer.
// ABOUTME: Tags the language, whitelists classes, collapses wrapper spans, and unwraps single lines.

//! Each highlight container is handled on its own:
//!
//! 1. detect the language from the first `source`/`text` marker (required)
//! 2. intersect every class list with the language whitelist
//! 3. replace class-less leaf spans with their text (fixed point)
//! 4. unwrap remaining class-less spans (fixed point)
//! 5. flatten `comment`/`string` spans that only wrap a same-class span
//! 6. unwrap the line `div` of single-line blocks

use crate::dom::select::{any_class, class, has_attr, tag};
use crate::dom::{Document, Element, NodeId};
use crate::error::{Result, TidyError};
use crate::options::Options;

/// Classes the highlighter uses to mark the language root of a block.
const LANGUAGE_MARKERS: &[&str] = &["source", "text"];

/// Marker classes whose nested duplicates are flattened to text.
const DEDUP_MARKERS: &[&str] = &["comment", "string"];

const INLINE_WRAPPER_TAG: &str = "span";
const CODE_BLOCK_TAG: &str = "pre";
const LINE_WRAPPER_TAG: &str = "div";

/// Tidies every highlight container. Fails on the first container without a
/// language marker.
pub fn tidy_highlights(doc: &mut Document, opts: &Options) -> Result<usize> {
    let containers = doc.select(class(&opts.highlight_class));
    let mut changed = 0;
    for (index, container) in containers.into_iter().enumerate() {
        if !doc.is_attached(container) {
            continue;
        }
        changed += tidy_container(doc, container, index, opts)?;
    }
    Ok(changed)
}

fn tidy_container(
    doc: &mut Document,
    container: NodeId,
    index: usize,
    opts: &Options,
) -> Result<usize> {
    let ext = detect_language(doc, container).ok_or_else(|| {
        TidyError::structural(format!(
            "highlight container #{} has no source or text marker",
            index
        ))
    })?;
    doc.update_element(container, |el| el.add_class(&ext));

    let whitelist = opts.whitelist(&ext);
    if whitelist.is_empty() {
        log::warn!("no highlight whitelist for {:?}; dropping all token classes", ext);
    }

    let mut changed = 1;
    changed += filter_classes(doc, container, whitelist);
    changed += unwrap_inline_wrappers(doc, container);
    changed += collapse_wrappers(doc, container);
    for marker in DEDUP_MARKERS {
        changed += dedup_marker(doc, container, marker);
    }
    changed += unwrap_single_lines(doc, container);
    Ok(changed)
}

/// Last class token of the first language marker below `container`.
pub fn detect_language(doc: &Document, container: NodeId) -> Option<String> {
    let marker = doc.find_within(container, any_class(LANGUAGE_MARKERS))?;
    doc.element(marker)?.classes().last().map(str::to_string)
}

/// Keeps only whitelisted class tokens on descendants of `container`.
pub fn filter_classes(doc: &mut Document, container: NodeId, whitelist: &[String]) -> usize {
    let mut changed = 0;
    for id in doc.select_within(container, has_attr("class")) {
        let Some(el) = doc.element(id) else {
            continue;
        };
        let before: Vec<String> = el.classes().map(str::to_string).collect();
        let kept: Vec<String> = before
            .iter()
            .filter(|c| whitelist.contains(c))
            .cloned()
            .collect();
        if kept.len() == before.len() && !kept.is_empty() {
            continue;
        }
        doc.update_element(id, |el| el.set_classes(kept.iter().map(String::as_str)));
        changed += 1;
    }
    changed
}

/// Replaces class-less spans without element children by their text until
/// none remain.
pub fn unwrap_inline_wrappers(doc: &mut Document, container: NodeId) -> usize {
    let mut changed = 0;
    loop {
        let leaves: Vec<NodeId> = doc
            .select_within(container, unclassed_wrapper)
            .into_iter()
            .filter(|&id| doc.element_children(id).is_empty())
            .collect();
        if leaves.is_empty() {
            break;
        }
        for id in leaves {
            doc.replace_with_text(id);
            changed += 1;
        }
    }
    changed
}

/// Splices the children of class-less spans into their parents until none
/// remain.
pub fn collapse_wrappers(doc: &mut Document, container: NodeId) -> usize {
    let mut changed = 0;
    loop {
        let wrappers = doc.select_within(container, unclassed_wrapper);
        if wrappers.is_empty() {
            break;
        }
        for id in wrappers {
            if doc.is_attached(id) {
                doc.unwrap(id);
                changed += 1;
            }
        }
    }
    changed
}

/// Flattens `marker` elements whose only element child carries the same
/// marker. Finer nested markup is dropped on purpose.
pub fn dedup_marker(doc: &mut Document, container: NodeId, marker: &str) -> usize {
    let mut changed = 0;
    loop {
        let nested: Vec<NodeId> = doc
            .select_within(container, class(marker))
            .into_iter()
            .filter(|&id| {
                let kids = doc.element_children(id);
                kids.len() == 1
                    && doc
                        .element(kids[0])
                        .is_some_and(|child| child.has_class(marker))
            })
            .collect();
        if nested.is_empty() {
            break;
        }
        for id in nested {
            if !doc.is_attached(id) {
                continue;
            }
            let text = doc.text(id);
            doc.set_text(id, text);
            changed += 1;
        }
    }
    changed
}

/// Unwraps the line wrapper of code blocks that hold exactly one line.
pub fn unwrap_single_lines(doc: &mut Document, container: NodeId) -> usize {
    let mut changed = 0;
    for pre in doc.select_within(container, tag(CODE_BLOCK_TAG)) {
        let lines: Vec<NodeId> = doc
            .element_children(pre)
            .into_iter()
            .filter(|&id| doc.is_tag(id, LINE_WRAPPER_TAG))
            .collect();
        if let &[line] = lines.as_slice() {
            doc.unwrap(line);
            changed += 1;
        }
    }
    changed
}

fn unclassed_wrapper(el: &Element) -> bool {
    el.name() == INLINE_WRAPPER_TAG && !el.has_attr("class")
}
