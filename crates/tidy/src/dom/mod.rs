// ABOUTME: Document tree for rendered HTML: arena nodes, predicate queries, parsing, serialization.
// ABOUTME: Backed by ego-tree so parent links are plain NodeId handles.

//! DOM utilities for rendered documentation pages.
//!
//! The tree is an index-addressed arena ([`ego_tree::Tree`]). Passes query it
//! with predicate closures from [`select`] and mutate it through [`Document`].

pub mod node;
mod parse;
pub mod select;
mod serialize;
pub mod tree;

pub use ego_tree::NodeId;
pub use node::{Element, Node};
pub use tree::Document;
