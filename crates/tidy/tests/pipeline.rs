// ABOUTME: Integration tests running the full cleaning pipeline over rendered documentation HTML.
// ABOUTME: Covers the fixture page end to end plus the invariants each pass must leave behind.

use docsite_tidy::dom::select::{attr_prefix, class, tag};
use docsite_tidy::{Document, Options, Pipeline};
use pretty_assertions::assert_eq;
use std::fs;

/// Load an HTML fixture from the fixtures directory.
fn load_html_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/{}.html",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path, e))
}

fn clean(html: &str) -> String {
    let mut doc = Document::parse_fragment(html);
    Pipeline::default().run(&mut doc).unwrap();
    doc.to_html()
}

#[test]
fn chunk_page_end_to_end() {
    let html = load_html_fixture("chunk");
    let page = Pipeline::default().clean_html(&html).unwrap();

    let expected = concat!(
        "---\n",
        "id: docs\n",
        "layout: docs\n",
        "title: Lodash Documentation\n",
        "version: 4.17.4\n",
        "---\n",
        "\n",
        "{% raw %}\n",
        r#"<h1><a href="https://lodash.com/">lodash</a> <span>v4.17.4</span></h1>"#,
        "\n",
        r#"<div class="doc-container">"#,
        "\n",
        "<h2>Array</h2>\n",
        "\n",
        r##"<p></p><h3 id="chunk"><a href="#chunk"><code>_.chunk(array, [_size_=1])</code></a></h3>"##,
        "\n",
        "<p><code>array</code> (Array): The array to process.</p>\n",
        r##"<p>See <a href="#map"><code>_.map</code></a> and <code>_.compact(array)</code>.</p>"##,
        "\n",
        r#"<div class="highlight js"><pre><span class="name">_</span><span class="delimiter method">.</span>chunk</pre></div>"#,
        "\n",
        r##"<p><a href="#lodash">Back to _</a></p>"##,
        "\n",
        r#"<h2 id="lodash">Lodash</h2>"#,
        "\n",
        "</div>\n",
        "{% endraw %}\n",
    );

    assert_eq!(page.version.as_deref(), Some("4.17.4"));
    assert_eq!(page.output, expected);
}

#[test]
fn cleaned_page_has_no_rules_or_renderer_ids() {
    let html = load_html_fixture("chunk");
    let page = Pipeline::default().clean_html(&html).unwrap();
    let doc = &page.document;

    assert!(doc.select(tag("hr")).is_empty());
    assert!(doc.select(attr_prefix("id", "user-content-")).is_empty());
    assert!(doc.select(attr_prefix("href", "#_")).is_empty());
}

#[test]
fn method_reference_scenarios() {
    let out = clean(concat!(
        r#"<div class="doc-container">"#,
        "<code>_.map</code>",
        "<code>_.mapValues</code>",
        "<code>foo(_.map)</code>",
        "</div>",
    ));
    assert_eq!(
        out,
        concat!(
            r#"<div class="doc-container">"#,
            r##"<a href="#map"><code>_.map</code></a>"##,
            r##"<a href="#mapValues"><code>_.mapValues</code></a>"##,
            "<code>foo(_.map)</code>",
            "</div>",
        )
    );
}

#[test]
fn nested_same_class_strings_collapse() {
    let out = clean(concat!(
        r#"<div class="highlight"><pre><div class="line"><span class="source js">"#,
        r#"<span class="string"><span class="string">abc</span></span>"#,
        r#"</span></div></pre></div>"#,
    ));
    assert_eq!(
        out,
        r#"<div class="highlight js"><pre><span class="string">abc</span></pre></div>"#
    );
}

#[test]
fn no_marker_directly_wraps_same_marker() {
    let out = clean(concat!(
        r#"<div class="highlight"><pre>"#,
        r#"<div class="line"><span class="source js"><span class="comment"><span class="comment">// a</span></span></span></div>"#,
        r#"<div class="line"><span class="source js"><span class="string"><span class="string">'b'</span></span></span></div>"#,
        r#"</pre></div>"#,
    ));
    let doc = Document::parse_fragment(&out);
    for marker in ["comment", "string"] {
        for id in doc.select(class(marker)) {
            let kids = doc.element_children(id);
            let nested = kids.len() == 1
                && doc.element(kids[0]).is_some_and(|el| el.has_class(marker));
            assert!(!nested, "nested {} in {}", marker, out);
        }
    }
    assert!(out.contains("<div><span class=\"comment\">// a</span></div>"));
}

#[test]
fn every_container_is_checked() {
    let err = Pipeline::default()
        .clean_html(concat!(
            r#"<div class="highlight"><pre><span class="source js">a</span></pre></div>"#,
            r#"<div class="highlight"><pre><span>b</span></pre></div>"#,
        ))
        .unwrap_err();
    assert!(err.is_structural());
    assert!(err.to_string().contains("#1"));
}

#[test]
fn custom_options_flow_through() {
    let opts = Options::builder()
        .doc_container_class("api")
        .rename_anchor("top", "home")
        .whitelist("js", ["keyword"])
        .build()
        .unwrap();
    let mut doc = Document::parse_fragment(concat!(
        r#"<div class="api"><code>_.each</code></div>"#,
        r#"<h2 id="top">t</h2>"#,
        r##"<a href="#top">t</a>"##,
        r#"<div class="highlight"><pre><span class="source js"><span class="keyword string">var</span></span></pre></div>"#,
    ));
    Pipeline::new(opts).run(&mut doc).unwrap();
    assert_eq!(
        doc.to_html(),
        concat!(
            r##"<div class="api"><a href="#each"><code>_.each</code></a></div>"##,
            r#"<h2 id="home">t</h2>"#,
            r##"<a href="#home">t</a>"##,
            r#"<div class="highlight js"><pre><span class="keyword">var</span></pre></div>"#,
        )
    );
}
