// ABOUTME: Tree-rewrite passes that turn rendered markdown HTML into a publishable page.
// ABOUTME: Each pass mutates the Document in place and reports how many nodes it changed.

pub mod anchors;
pub mod attributes;
pub mod autolink;
pub mod headers;
pub mod highlights;
pub mod rules;

pub use anchors::rename_anchor;
pub use attributes::strip_renderer_attributes;
pub use autolink::auto_link;
pub use headers::repair_headers;
pub use highlights::tidy_highlights;
pub use rules::remove_horizontal_rules;
