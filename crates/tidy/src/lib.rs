// ABOUTME: Main library entry point for the docsite tidy pipeline.
// ABOUTME: Re-exports the public API: Pipeline, CleanedPage, Document, Options, TidyError.

//! docsite-tidy - cleans markdown-rendered HTML into a publishable docs page.
//!
//! The renderer leaves artifacts behind (prefixed ids, self-link anchors,
//! fragmented header content, verbose highlighter markup). A [`Pipeline`]
//! runs the cleaning passes over a [`Document`] and renders the page with its
//! YAML front matter.
//!
//! # Example
//!
//! ```
//! use docsite_tidy::{Options, Pipeline, TidyError};
//!
//! fn main() -> Result<(), TidyError> {
//!     let pipeline = Pipeline::new(Options::default());
//!     let page = pipeline.clean_html(
//!         r#"<h1>lodash <span>v4.17.4</span></h1><div class="doc-container"><code>_.map</code></div>"#,
//!     )?;
//!     assert!(page.output.contains(r##"<a href="#map"><code>_.map</code></a>"##));
//!     Ok(())
//! }
//! ```

pub mod cleaners;
pub mod dom;
pub mod error;
pub mod options;
pub mod page;
pub mod pipeline;
pub mod version;

pub use crate::dom::{Document, Element, Node, NodeId};
pub use crate::error::{Result, TidyError};
pub use crate::options::{AnchorRename, Options, OptionsBuilder};
pub use crate::page::{render_page, FrontMatter};
pub use crate::pipeline::{CleanedPage, Pipeline};
pub use crate::version::extract_version;
