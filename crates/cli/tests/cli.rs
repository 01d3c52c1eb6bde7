// ABOUTME: Integration tests for the docsite CLI binary.
// ABOUTME: Tests stdout output, --out-dir naming, version override, config loading, and failures.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const PAGE: &str = concat!(
    r#"<h1>lodash <span>v4.17.4</span></h1>"#,
    r#"<div class="doc-container"><hr><p><code>_.map</code></p></div>"#,
);

fn docsite_cmd() -> Command {
    Command::cargo_bin("docsite").unwrap()
}

fn write_input(dir: &TempDir, html: &str) -> std::path::PathBuf {
    let path = dir.path().join("docs.html");
    fs::write(&path, html).unwrap();
    path
}

#[test]
fn cleans_file_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, PAGE);

    docsite_cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\nid: docs\n"))
        .stdout(predicate::str::contains("version: 4.17.4"))
        .stdout(predicate::str::contains(r##"<a href="#map"><code>_.map</code></a>"##))
        .stdout(predicate::str::contains("<hr").not());
}

#[test]
fn out_dir_uses_version_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, PAGE);
    let out_dir = temp_dir.path().join("docs");

    docsite_cmd()
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let written = fs::read_to_string(out_dir.join("4.17.4.html")).unwrap();
    assert!(written.contains("{% raw %}"));
    assert!(written.ends_with("{% endraw %}\n"));
}

#[test]
fn version_override_and_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "<p>no heading</p>");

    let output = docsite_cmd()
        .arg(&input)
        .arg("--doc-version")
        .arg("5.0.0")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["version"], "5.0.0");
    assert!(value["output"].as_str().unwrap().contains("version: 5.0.0"));
}

#[test]
fn missing_version_writes_null() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "<p>no heading</p>");
    let out_dir = temp_dir.path().join("out");

    docsite_cmd()
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let written = fs::read_to_string(out_dir.join("null.html")).unwrap();
    assert!(written.contains("version: null"));
}

#[test]
fn reads_stdin() {
    let mut child = docsite_cmd()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(PAGE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version: 4.17.4"));
}

#[test]
fn config_file_changes_container() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        r#"<div class="api"><code>_.each</code></div>"#,
    );
    let config = temp_dir.path().join("options.json");
    fs::write(&config, r#"{"doc_container_class": "api"}"#).unwrap();

    docsite_cmd()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains(r##"<a href="#each">"##));
}

#[test]
fn structural_error_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(
        &temp_dir,
        r#"<div class="highlight"><pre><span>x</span></pre></div>"#,
    );

    docsite_cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no source or text marker"));
}

#[test]
fn missing_input_file_fails() {
    docsite_cmd()
        .arg("/definitely/not/here.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}
