//! Specs for `limn apply` and `limn strip`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// An empty store leaves the document byte-identical
#[test]
fn empty_store_echoes_stdin() {
    let sandbox = Sandbox::new();
    let doc = "# Title\n\nSome **bold** text.\n";

    let assert = sandbox.cmd().arg("apply").write_stdin(doc).assert();

    assert
        .success()
        .stdout(doc)
        .stderr(predicates::str::contains("store is empty"));
}

/// An exact occurrence is wrapped in a mark tag carrying the color
#[test]
fn exact_match_is_wrapped() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("world", "#ffeb3b")]);
    sandbox.write("doc.md", "Hello world\n");

    sandbox
        .cmd()
        .args(["apply", "doc.md"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            r##"<mark style="background-color: #ffeb3b;"##,
        ))
        .stdout(predicates::str::contains(">world</mark>"))
        .stderr(predicates::str::contains("1 highlighted"));
}

/// Words are matched across markdown syntax, wrapping only the words
#[test]
fn fuzzy_match_crosses_markdown_syntax() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("very important", "#64b5f6")]);
    sandbox.write("doc.md", "This is **very** important text\n");

    let output = sandbox
        .cmd()
        .args(["apply", "doc.md"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains(">very</mark>**"));
    assert!(stdout.contains(">important</mark>"));
    // The emphasis markers stay outside the marks.
    assert!(stdout.contains("This is **"));
}

/// Highlights without any occurrence are reported, not errors
#[test]
fn unmatched_highlight_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("no such phrase", "#ffeb3b")]);
    let doc = "plain text\n";

    sandbox
        .cmd()
        .arg("apply")
        .write_stdin(doc)
        .assert()
        .success()
        .stdout(doc)
        .stderr(predicates::str::contains("1 without a match"));
}

/// --format json wraps document and per-highlight outcomes in one object
#[test]
fn json_format_reports_outcomes() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("world", "#ffeb3b"), ("absent", "#8bc34a")]);

    let output = sandbox
        .cmd()
        .args(["apply", "--format", "json"])
        .write_stdin("Hello world\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["document"].as_str().unwrap().contains("<mark"));

    let outcomes = value["highlights"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    let statuses: Vec<&str> = outcomes
        .iter()
        .map(|o| o["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"exact"));
    assert!(statuses.contains(&"no_match"));
}

/// --output writes the annotated document to a file
#[test]
fn output_flag_writes_file() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("world", "#ffeb3b")]);
    sandbox.write("doc.md", "Hello world");

    sandbox
        .cmd()
        .args(["apply", "doc.md", "-o", "annotated.md"])
        .assert()
        .success();

    assert!(sandbox.read("annotated.md").contains("<mark"));
}

/// A missing input file is an I/O error
#[test]
fn missing_input_file_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["apply", "nope.md"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicates::str::contains("io error"));
}

/// A corrupt store degrades to an empty collection
#[test]
fn corrupt_store_is_treated_as_empty() {
    let sandbox = Sandbox::new();
    sandbox.write("highlights.json", "{ this is not json");
    let doc = "untouched\n";

    sandbox
        .cmd()
        .arg("apply")
        .write_stdin(doc)
        .assert()
        .success()
        .stdout(doc);
}

/// strip removes injected markers, recovering the original document
#[test]
fn strip_inverts_apply() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("very important", "#64b5f6"), ("text", "#ffeb3b")]);
    let doc = "This is **very** important text\n";
    sandbox.write("doc.md", doc);

    sandbox
        .cmd()
        .args(["apply", "doc.md", "-o", "annotated.md"])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["strip", "annotated.md"])
        .assert()
        .success()
        .stdout(doc);
}

/// Applying twice produces the same document as applying once
#[test]
fn reapply_is_idempotent() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("very important", "#64b5f6"), ("Hello", "#ffeb3b")]);
    sandbox.write("doc.md", "Hello, this is **very** important\n");

    sandbox
        .cmd()
        .args(["apply", "doc.md", "-o", "once.md"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["apply", "once.md", "-o", "twice.md"])
        .assert()
        .success();

    assert_eq!(sandbox.read("once.md"), sandbox.read("twice.md"));
}

/// --quiet suppresses the stderr summary
#[test]
fn quiet_suppresses_summary() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("world", "#ffeb3b")]);

    sandbox
        .cmd()
        .args(["apply", "--quiet"])
        .write_stdin("Hello world")
        .assert()
        .success()
        .stderr(predicates::str::is_empty());
}
