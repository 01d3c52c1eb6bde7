// ABOUTME: Runs the six cleaning passes in their fixed order and renders the output page.
// ABOUTME: Pipeline::clean is the pure (tree, version) -> (cleaned tree, page) entry point.

use serde::Serialize;

use crate::cleaners::{
    auto_link, remove_horizontal_rules, rename_anchor, repair_headers, strip_renderer_attributes,
    tidy_highlights,
};
use crate::dom::Document;
use crate::error::Result;
use crate::options::Options;
use crate::page::render_page;
use crate::version::extract_version;

/// Result of cleaning one document.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedPage {
    #[serde(skip)]
    pub document: Document,
    pub version: Option<String>,
    /// Front matter plus raw-wrapped body.
    pub output: String,
}

/// The ordered cleaning passes, configured once and reusable across documents.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    opts: Options,
}

impl Pipeline {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    /// Applies every pass to `doc` in place.
    ///
    /// Header repair relies on h3 anchors surviving the attribute pass, so the
    /// order is fixed. Highlight tidying is the only pass that can fail.
    pub fn run(&self, doc: &mut Document) -> Result<()> {
        let n = auto_link(doc, &self.opts);
        log::debug!("auto_link: {} links", n);

        let n = remove_horizontal_rules(doc);
        log::debug!("remove_horizontal_rules: {} removed", n);

        let n = strip_renderer_attributes(doc, &self.opts);
        log::debug!("strip_renderer_attributes: {} elements", n);

        let n = rename_anchor(doc, &self.opts.anchor_rename);
        log::debug!("rename_anchor: {} attributes", n);

        let n = repair_headers(doc);
        log::debug!("repair_headers: {} nodes", n);

        let n = tidy_highlights(doc, &self.opts)?;
        log::debug!("tidy_highlights: {} changes", n);

        Ok(())
    }

    /// Cleans `doc` and renders the page for `version`.
    pub fn clean(&self, mut doc: Document, version: Option<String>) -> Result<CleanedPage> {
        self.run(&mut doc)?;
        let output = render_page(&doc.to_html(), version.as_deref())?;
        Ok(CleanedPage {
            document: doc,
            version,
            output,
        })
    }

    /// Parses rendered HTML, reads its version marker and cleans it.
    pub fn clean_html(&self, html: &str) -> Result<CleanedPage> {
        let doc = Document::parse_fragment(html);
        let version = extract_version(&doc);
        if version.is_none() {
            log::warn!("no version marker found; front matter will use null");
        }
        self.clean(doc, version)
    }
}
