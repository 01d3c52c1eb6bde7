// ABOUTME: Configuration for the tidy pipeline: container classes, renderer prefix, anchor rename, whitelists.
// ABOUTME: OptionsBuilder provides a fluent API; Options also loads from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};

/// Anchor id rename applied by the rename pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRename {
    pub from: String,
    pub to: String,
}

impl Default for AnchorRename {
    fn default() -> Self {
        Self {
            from: "_".to_string(),
            to: "lodash".to_string(),
        }
    }
}

/// Configuration options for the tidy pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Class of the containers whose code spans are autolinked.
    pub doc_container_class: String,
    /// Prefix the markdown renderer puts on generated ids.
    pub renderer_id_prefix: String,
    pub anchor_rename: AnchorRename,
    /// Class of the element wrapping one highlighted code block.
    pub highlight_class: String,
    /// Allowed highlight class tokens per language extension.
    pub highlights: BTreeMap<String, Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        let mut highlights = BTreeMap::new();
        highlights.insert("html".to_string(), vec!["string".to_string()]);
        highlights.insert(
            "js".to_string(),
            [
                "comment",
                "console",
                "delimiter",
                "method",
                "modifier",
                "name",
                "numeric",
                "string",
                "support",
                "type",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        );

        Self {
            doc_container_class: "doc-container".to_string(),
            renderer_id_prefix: "user-content-".to_string(),
            anchor_rename: AnchorRename::default(),
            highlight_class: "highlight".to_string(),
            highlights,
        }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Loads options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let opts: Options = serde_json::from_str(json).map_err(TidyError::options)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Allowed tokens for a language extension; empty when unknown.
    pub fn whitelist(&self, ext: &str) -> &[String] {
        self.highlights.get(ext).map(Vec::as_slice).unwrap_or(&[])
    }

    fn validate(&self) -> Result<()> {
        if self.highlight_class.trim().is_empty() {
            return Err(TidyError::Options(
                "highlight_class must not be empty".to_string(),
            ));
        }
        if self.doc_container_class.trim().is_empty() {
            return Err(TidyError::Options(
                "doc_container_class must not be empty".to_string(),
            ));
        }
        if self.anchor_rename.from.is_empty() || self.anchor_rename.to.is_empty() {
            return Err(TidyError::Options(
                "anchor_rename needs both from and to".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for constructing Options with custom settings.
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    opts: Options,
}

impl OptionsBuilder {
    /// Create a new OptionsBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    pub fn doc_container_class(mut self, class: impl Into<String>) -> Self {
        self.opts.doc_container_class = class.into();
        self
    }

    pub fn renderer_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.opts.renderer_id_prefix = prefix.into();
        self
    }

    pub fn rename_anchor(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.opts.anchor_rename = AnchorRename {
            from: from.into(),
            to: to.into(),
        };
        self
    }

    pub fn highlight_class(mut self, class: impl Into<String>) -> Self {
        self.opts.highlight_class = class.into();
        self
    }

    /// Set the allowed class tokens for one language extension.
    pub fn whitelist<I, S>(mut self, ext: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts
            .highlights
            .insert(ext.into(), tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Build the Options, rejecting empty required values.
    pub fn build(self) -> Result<Options> {
        self.opts.validate()?;
        Ok(self.opts)
    }
}
