//! Integration tests for the ktools binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test config file.
fn create_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, content).unwrap();
    config_path
}

/// Get a command with config path set via env var.
fn cmd_with_config(config_path: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ktools");
    cmd.env("KTOOLS_CONFIG", config_path);
    cmd
}

#[test]
fn test_glob_uses_configured_delimiter() {
    let dir = TempDir::new().unwrap();
    let config = create_config(
        &dir,
        r##"
[glob]
delimiter = "#"
case_insensitive = true
"##,
    );

    cmd_with_config(&config)
        .write_stdin(r#"{"op":"glob","pattern":"a#b*"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r##""#^a\\#b.*$#i""##));
}

#[test]
fn test_match_honors_case_insensitive_config() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[glob]\ncase_insensitive = true\n");

    cmd_with_config(&config)
        .write_stdin(r#"{"op":"match","pattern":"*.TXT","candidates":["a.txt","b.md"]}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"a.txt\"]\n"));
}

#[test]
fn test_invalid_config_delimiter() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[glob]\ndelimiter = \"ab\"\n");

    cmd_with_config(&config)
        .write_stdin(r#"{"op":"glob","pattern":"a"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_invalid_config_toml() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[glob\n");

    cmd_with_config(&config)
        .write_stdin(r#"{"op":"is_digit","input":"1"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_project_config_overrides_user() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[glob]\ndelimiter = \"@\"\n");
    let project = TempDir::new().unwrap();
    fs::write(project.path().join(".ktools.toml"), "[glob]\nanchor = false\n").unwrap();

    let input = format!(
        r#"{{"op":"glob","pattern":"a*","cwd":{}}}"#,
        serde_json::to_string(&project.path().to_string_lossy()).unwrap()
    );

    cmd_with_config(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::diff("\"@a.*@\"\n"));
}

#[test]
fn test_tree_default_extension() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "");
    let data = TempDir::new().unwrap();
    fs::create_dir(data.path().join("notes")).unwrap();
    fs::write(data.path().join("notes/today.TXT"), "x").unwrap();
    fs::write(data.path().join("readme.md"), "x").unwrap();

    let input = format!(
        r#"{{"op":"tree","dir":{}}}"#,
        serde_json::to_string(&data.path().to_string_lossy()).unwrap()
    );

    cmd_with_config(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("today.TXT"))
        .stdout(predicate::str::contains("readme.md").not());
}

#[test]
fn test_tree_extension_from_config() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "[tree]\nextension = \"md\"\n");
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("a.txt"), "x").unwrap();
    fs::write(data.path().join("b.md"), "x").unwrap();

    let input = format!(
        r#"{{"op":"tree","dir":{}}}"#,
        serde_json::to_string(&data.path().to_string_lossy()).unwrap()
    );

    cmd_with_config(&config)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("b.md"))
        .stdout(predicate::str::contains("a.txt").not());
}

#[test]
fn test_audit_log_written() {
    let dir = TempDir::new().unwrap();
    let audit_path = dir.path().join("audit.jsonl");
    let config = create_config(
        &dir,
        &format!(
            "[audit]\nenabled = true\npath = {}\n",
            serde_json::to_string(&audit_path.to_string_lossy()).unwrap()
        ),
    );

    cmd_with_config(&config)
        .write_stdin(r#"{"op":"tokenize","input":"a b"}"#)
        .assert()
        .success();
    cmd_with_config(&config)
        .write_stdin(r#"{"op":"tokenize","input":"a\"b"}"#)
        .assert()
        .code(2);

    let content = fs::read_to_string(&audit_path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["op"], "tokenize");
    assert_eq!(lines[0]["failed"], false);
    assert_eq!(lines[1]["failed"], true);
    assert_eq!(lines[1]["kind"], "tokenize.malformed_quote");
    assert!(lines[1]["timestamp"].is_string());
}

#[test]
fn test_audit_disabled_by_default() {
    let dir = TempDir::new().unwrap();
    let config = create_config(&dir, "");

    cmd_with_config(&config)
        .write_stdin(r#"{"op":"is_digit","input":"5"}"#)
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));

    assert!(!dir.path().join("audit.jsonl").exists());
}
