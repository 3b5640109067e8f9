//! Specs for `limn add`, `limn remove`, and `limn list`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// add prints the new id and persists the record
#[test]
fn add_prints_id_and_persists() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .cmd()
        .args(["add", "deep learning"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(output).unwrap().trim().to_string();
    assert!(!id.is_empty());

    let store = sandbox.read("highlights.json");
    assert!(store.contains(&id));
    assert!(store.contains("deep learning"));
    assert!(store.contains("last_updated"));
}

/// add without --color uses the default yellow
#[test]
fn add_defaults_to_yellow() {
    let sandbox = Sandbox::new();

    sandbox.cmd().args(["add", "snippet"]).assert().success();

    assert!(sandbox.read("highlights.json").contains("#ffeb3b"));
}

/// add accepts palette names and literal hex values
#[test]
fn add_accepts_palette_and_hex_colors() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["add", "one", "--color", "blue"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["add", "two", "--color", "#AA00FF"])
        .assert()
        .success();

    let store = sandbox.read("highlights.json");
    assert!(store.contains("#64b5f6"));
    assert!(store.contains("#aa00ff"));
}

/// add rejects colors outside the palette / hex formats
#[test]
fn add_rejects_unknown_color() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["add", "snippet", "--color", "crimson"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unrecognized color"));
}

/// Blank highlight text is rejected at the add boundary
#[test]
fn add_rejects_blank_text() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["add", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("empty"));

    assert!(!sandbox.store_path().exists());
}

/// remove deletes the record and reports it
#[test]
fn remove_known_id_succeeds() {
    let sandbox = Sandbox::new();
    let seeded = sandbox.seed(&[("kept", "#ffeb3b"), ("dropped", "#8bc34a")]);

    sandbox
        .cmd()
        .args(["remove", &seeded[1].id.to_string()])
        .assert()
        .success()
        .stdout(predicates::str::contains("removed"));

    let store = sandbox.read("highlights.json");
    assert!(store.contains("kept"));
    assert!(!store.contains("dropped"));
}

/// remove with an unknown id exits 1 and changes nothing
#[test]
fn remove_unknown_id_exits_not_found() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("kept", "#ffeb3b")]);
    let before = sandbox.read("highlights.json");

    sandbox
        .cmd()
        .args(["remove", "00000000-0000-4000-8000-000000000000"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("no highlight"));

    assert_eq!(sandbox.read("highlights.json"), before);
}

/// list on a fresh store explains there is nothing yet
#[test]
fn list_empty_store() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("no highlights"))
        .stdout(predicates::str::contains("not created yet"));
}

/// list shows each record plus the store status line
#[test]
fn list_shows_entries_and_status() {
    let sandbox = Sandbox::new();
    let seeded = sandbox.seed(&[("deep learning", "#64b5f6")]);

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains(seeded[0].id.to_string()))
        .stdout(predicates::str::contains("deep learning"))
        .stdout(predicates::str::contains("store:"));
}

/// list --format json emits the full records and store status
#[test]
fn list_json_shape() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("deep learning", "#64b5f6")]);

    let output = sandbox
        .cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["highlights"][0]["text"], "deep learning");
    assert_eq!(value["highlights"][0]["color"], "#64b5f6");
    assert!(value["store"]["exists"].as_bool().unwrap());
}

/// The config file can relocate the store
#[test]
fn config_file_sets_store_path() {
    let sandbox = Sandbox::new();
    sandbox.write(
        "limn.toml",
        "version = 1\n\n[store]\npath = \"notes/marks.json\"\n",
    );

    sandbox
        .bare_cmd()
        .args(["add", "snippet"])
        .assert()
        .success();

    assert!(sandbox.path().join("notes/marks.json").exists());
}

/// Unknown config keys warn but do not fail
#[test]
fn unknown_config_key_warns() {
    let sandbox = Sandbox::new();
    sandbox.write("limn.toml", "version = 1\nfuture_flag = true\n");

    sandbox
        .bare_cmd()
        .arg("list")
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field"));
}

/// An unsupported config version is a config error
#[test]
fn unsupported_config_version_fails() {
    let sandbox = Sandbox::new();
    sandbox.write("limn.toml", "version = 99\n");

    sandbox
        .bare_cmd()
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}
