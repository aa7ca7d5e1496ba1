//! Command-line Behaviour Tests
//!
//! Runs the `response-review` binary against small submission dumps written to
//! a temporary directory.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FLAT_SUBMISSIONS: &str = r#"[
    {"id": "1", "author_name": "alice", "author_id": "u1", "body_text": "print('hi')"},
    {"id": "2", "author_name": "alicia", "author_id": "u2", "body_text": "print('hi')"},
    {"id": "3", "author_name": "bob", "author_id": "u3", "body_text": "a\nb\nc"},
    {"id": "4", "author_name": "carol", "author_id": "u4", "body_text": "a\nx\nc"}
]"#;

const FORM_SUBMISSION: &str = r#"{
    "id": "gpt",
    "user": {"username": "chatbot", "id": "u99"},
    "response": {"qualifier": {"value": "print('hi')"}}
}"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "responses.json", FLAT_SUBMISSIONS);
    (dir, path)
}

fn cmd() -> Command {
    Command::cargo_bin("response-review").unwrap()
}

/// Fuzzy author search returns both close names
#[test]
fn test_filter_fuzzy_author() {
    let (_dir, input) = setup();
    cmd()
        .args(["filter"])
        .arg(&input)
        .arg("user:alice")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 matching submission(s)"))
        .stdout(predicate::str::contains("alicia"));
}

/// Exact author search returns only the exact name
#[test]
fn test_filter_exact_author_tsv() {
    let (_dir, input) = setup();
    cmd()
        .args(["--format", "tsv", "filter"])
        .arg(&input)
        .arg("user:exact:alice")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\talice\tu1\t1"))
        .stdout(predicate::str::contains("alicia").not());
}

/// Whitespace inside the query is ignored, even across arguments
#[test]
fn test_filter_query_whitespace_stripped() {
    let (_dir, input) = setup();
    cmd()
        .arg("filter")
        .arg(&input)
        .args(["res", ":", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 matching submission(s)"));
}

/// Malformed queries fail with a readable error
#[test]
fn test_filter_invalid_query() {
    let (_dir, input) = setup();
    for query in ["user", "res:print()", "user:re:al", "name:alice"] {
        cmd()
            .arg("filter")
            .arg(&input)
            .arg(query)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid query"));
    }
}

/// JSON output is a parseable array of records
#[test]
fn test_filter_json_output() {
    let (_dir, input) = setup();
    let output = cmd()
        .args(["--format", "json", "filter"])
        .arg(&input)
        .arg("res:re:hi")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

/// The diff lists removed lines before added lines
#[test]
fn test_diff_line_order() {
    let (_dir, input) = setup();
    let output = cmd().arg("diff").arg(&input).args(["3", "4"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let body: Vec<&str> = stdout
        .lines()
        .skip_while(|line| !line.is_empty())
        .skip(1)
        .collect();
    assert_eq!(body, vec!["  a", "- b", "+ x", "  c"]);
    assert!(stdout.contains("Lines: 2 unchanged, 1 removed, 1 added"));
}

/// Unknown ids are reported
#[test]
fn test_diff_unknown_id() {
    let (_dir, input) = setup();
    cmd()
        .arg("diff")
        .arg(&input)
        .args(["1", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Submission 'missing' not found"));
}

/// Identical bodies are reported as a pair
#[test]
fn test_scan_finds_identical_pair() {
    let (_dir, input) = setup();
    cmd()
        .arg("scan")
        .arg(&input)
        .arg("0.9")
        .assert()
        .success()
        .stdout(predicate::str::contains("First: alice | Second: alicia (100.00%)"));
}

/// Out-of-range and non-numeric thresholds are rejected
#[test]
fn test_scan_invalid_thresholds() {
    let (_dir, input) = setup();
    for threshold in ["0", "1", "-0.5", "1.5", "abc"] {
        cmd()
            .arg("scan")
            .arg(&input)
            .arg(threshold)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid threshold"));
    }
}

/// Appended form responses take part in the scan and the report
#[test]
fn test_scan_with_appended_form_and_report() {
    let (dir, input) = setup();
    let extra = write_file(&dir, "generated.json", FORM_SUBMISSION);
    let report = dir.path().join("flagged.json");

    cmd()
        .arg("scan")
        .arg(&input)
        .arg("0.95")
        .arg("--append")
        .arg(&extra)
        .arg("--report")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("chatbot"));

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    let flagged: Vec<&str> = parsed["plagiarized"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(flagged, vec!["1", "2", "gpt"]);
    assert!(parsed["version"].is_string());
    assert!(parsed["created_at"].is_string());
}

/// The flag command writes both categories and skips double flags
#[test]
fn test_flag_report() {
    let (dir, input) = setup();
    let report = dir.path().join("report.json");

    cmd()
        .arg("flag")
        .arg(&input)
        .args(["--plagiarized", "1", "--plagiarized", "2", "--generated", "1"])
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stderr(predicate::str::contains("already flagged"));

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(parsed["plagiarized"].as_array().unwrap().len(), 2);
    assert!(parsed["generated"].as_array().unwrap().is_empty());
}

/// TSV flag output keeps one row per record even with tabs in names
#[test]
fn test_flag_tsv_escapes_cells() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "tabs.json",
        r#"[{"id": "t\t1", "author_name": "ann\tlee\nsmith", "author_id": "u1", "body_text": "x"}]"#,
    );

    let output = cmd()
        .args(["--format", "tsv", "flag"])
        .arg(&input)
        .args(["--generated", "t\t1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["flag\tid\tauthor_name", "generated\tt 1\tann lee smith"]);
}

/// Restricting to confirmed authors drops everyone else
#[test]
fn test_confirmed_authors() {
    let (dir, input) = setup();
    let confirmed = write_file(
        &dir,
        "confirmed.json",
        r#"[{"id": "c1", "author_name": "bob", "author_id": "u3"}]"#,
    );

    cmd()
        .args(["--format", "tsv", "filter"])
        .arg(&input)
        .arg("res:a")
        .arg("--confirmed")
        .arg(&confirmed)
        .assert()
        .success()
        .stdout(predicate::str::contains("3\tbob"))
        .stdout(predicate::str::contains("4\tcarol").not());
}

/// Missing or malformed input files fail cleanly
#[test]
fn test_bad_input_files() {
    let dir = TempDir::new().unwrap();
    let garbage = write_file(&dir, "garbage.json", "{not json");

    cmd()
        .arg("filter")
        .arg(&garbage)
        .arg("user:alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid submission JSON"));

    cmd()
        .arg("filter")
        .arg(dir.path().join("absent.json"))
        .arg("user:alice")
        .assert()
        .failure();
}

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("filter"))
        .stdout(predicate::str::contains("scan"));
}
