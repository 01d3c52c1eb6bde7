// ABOUTME: Renders the publishable page: YAML front matter followed by the raw-wrapped body.
// ABOUTME: The body sits inside {% raw %} so the site generator leaves template-like code alone.

use serde::Serialize;

use crate::error::Result;

const RAW_OPEN: &str = "{% raw %}";
const RAW_CLOSE: &str = "{% endraw %}";

/// Fixed-key front matter consumed by the site generator.
///
/// `version` is written verbatim (or as `null`) after the serialized keys so a
/// value like `4.17` is not quoted into a YAML string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    pub id: String,
    pub layout: String,
    pub title: String,
    #[serde(skip)]
    pub version: Option<String>,
}

impl FrontMatter {
    pub fn docs(version: Option<String>) -> Self {
        Self {
            id: "docs".to_string(),
            layout: "docs".to_string(),
            title: "Lodash Documentation".to_string(),
            version,
        }
    }

    /// The `---` delimited YAML block, trailing newline included.
    pub fn to_yaml_block(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        let version = self.version.as_deref().unwrap_or("null");
        Ok(format!("---\n{}version: {}\n---\n", yaml, version))
    }
}

/// Joins front matter and the serialized body into the final page.
pub fn render_page(body_html: &str, version: Option<&str>) -> Result<String> {
    let front = FrontMatter::docs(version.map(str::to_string)).to_yaml_block()?;
    Ok(format!(
        "{}\n{}\n{}\n{}\n",
        front,
        RAW_OPEN,
        body_html.trim(),
        RAW_CLOSE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_front_matter_and_raw_body() {
        let page = render_page("\n<p>hi</p>\n", Some("4.17.4")).unwrap();
        assert_eq!(
            page,
            "---\nid: docs\nlayout: docs\ntitle: Lodash Documentation\nversion: 4.17.4\n---\n\n{% raw %}\n<p>hi</p>\n{% endraw %}\n"
        );
    }

    #[test]
    fn missing_version_is_null() {
        let page = render_page("<p>hi</p>", None).unwrap();
        assert!(page.contains("\nversion: null\n"));
    }

    #[test]
    fn numeric_looking_version_is_not_quoted() {
        let page = render_page("<p/>", Some("4.17")).unwrap();
        let line = page.lines().find(|l| l.starts_with("version:")).unwrap();
        assert_eq!(line, "version: 4.17");

        let block = FrontMatter::docs(Some("5".to_string())).to_yaml_block().unwrap();
        assert!(block.ends_with("title: Lodash Documentation\nversion: 5\n---\n"));
    }
}
