// ABOUTME: Extracts the documentation version from the page's first level-1 heading.
// ABOUTME: Reads the first <span> in the first <h1> and strips one leading non-digit ("v4.17.4" -> "4.17.4").

use crate::dom::select::tag;
use crate::dom::Document;

/// Version marker of the first `h1`, if any.
pub fn extract_version(doc: &Document) -> Option<String> {
    let h1 = doc.select(tag("h1")).into_iter().next()?;
    let span = doc.find_within(h1, tag("span"))?;
    let text = doc.text(span);
    let text = text.trim();

    let mut chars = text.chars();
    let version = match chars.next() {
        Some(c) if !c.is_ascii_digit() => chars.as_str(),
        _ => text,
    };

    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
