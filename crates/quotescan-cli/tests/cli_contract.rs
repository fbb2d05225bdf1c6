#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

fn quotescan() -> Command {
    Command::cargo_bin("quotescan").expect("quotescan binary")
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout must be JSON")
}

#[test]
fn contains_reports_found_with_exit_zero() {
    quotescan()
        .args(["contains", "or", "id = 3 or 4"])
        .assert()
        .code(0)
        .stdout("true\n");
}

#[test]
fn contains_inside_quotes_exits_not_found() {
    quotescan()
        .args(["contains", "or", "name = 'a or b'"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn contains_quiet_prints_nothing() {
    quotescan()
        .args(["contains", "--quiet", "or", "id = 3 or 4"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn empty_needle_is_config_error() {
    quotescan()
        .args(["contains", "", "anything"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("needle must not be empty"));
}

#[test]
fn contains_reads_stdin() {
    quotescan()
        .args(["contains", "DELETE"])
        .write_stdin("SELECT 'DELETE' FROM t\n")
        .assert()
        .code(1);
}

#[test]
fn split_text_output_one_segment_per_line() {
    quotescan()
        .args(["split", ",", "a,b,'c,d',e"])
        .assert()
        .success()
        .stdout("a\nb\n'c,d'\ne\n");
}

#[test]
fn split_json_with_token_kept() {
    let value = stdout_json(quotescan().args([
        "split",
        "--include-token",
        "--format",
        "json",
        ",",
        "a,'b,c',d",
    ]));
    assert_eq!(value, json!(["a,", "'b,c',", "d"]));
}

#[test]
fn split_token_case_sensitivity() {
    let value = stdout_json(quotescan().args(["split", "--format", "json", "and", "x AND y"]));
    assert_eq!(value, json!(["x ", " y"]));

    let value = stdout_json(quotescan().args([
        "split",
        "--token-case-sensitive",
        "--format",
        "json",
        "and",
        "x AND y",
    ]));
    assert_eq!(value, json!(["x AND y"]));
}

#[test]
fn sql_split_ignores_quoted_semicolons() {
    quotescan()
        .arg("sql-split")
        .write_stdin("INSERT INTO t VALUES ('a;b'); SELECT 1;\n")
        .assert()
        .success()
        .stdout("INSERT INTO t VALUES ('a;b');\nSELECT 1;\n");
}

#[test]
fn sql_split_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.sql");
    fs::write(&path, "SELECT `a;b` FROM t;\n;\nSELECT 2;\n").unwrap();

    let value = stdout_json(quotescan().args([
        "sql-split",
        "--format",
        "json",
        "--file",
        path.to_str().unwrap(),
    ]));
    assert_eq!(value, json!(["SELECT `a;b` FROM t;", "\nSELECT 2;"]));
}

#[test]
fn lex_json_tokens() {
    let value = stdout_json(quotescan().args(["lex", "--format", "json", "SELECT 'a b', NOW()"]));
    assert_eq!(
        value,
        json!([
            {"kind": "identifier", "text": "SELECT"},
            {"kind": "string_literal", "text": "'a b'"},
            {"kind": "function_call", "text": "NOW()"},
        ])
    );
}

#[test]
fn lex_unterminated_literal_exits_lex_error() {
    quotescan()
        .args(["lex", "SELECT 'oops"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "unterminated string literal starting at byte 7",
        ));
}

#[test]
fn truncate_never_splits_code_point() {
    quotescan()
        .args(["truncate", "--bytes", "13", "This is a 10¢ test"])
        .assert()
        .success()
        .stdout("This is a 10\n");

    quotescan()
        .args(["truncate", "--bytes", "4", "--from-char", "10", "This is a 10¢ test"])
        .assert()
        .success()
        .stdout("10¢\n");
}

#[test]
fn unquoted_upper_leaves_literals() {
    quotescan()
        .args(["unquoted", "--op", "upper", "select 'abc' from t"])
        .assert()
        .success()
        .stdout("SELECT 'abc' FROM T\n");
}

#[test]
fn unquoted_flatten_is_default() {
    quotescan()
        .args(["unquoted", "a   b 'c   d'"])
        .assert()
        .success()
        .stdout("a b 'c   d'\n");
}

#[test]
fn spans_json_partition() {
    let value = stdout_json(quotescan().args(["spans", "--format", "json", "a 'b' c"]));
    assert_eq!(
        value,
        json!([
            {"kind": "unquoted", "start": 0, "end": 2, "text": "a "},
            {"kind": "quoted", "start": 2, "end": 5, "text": "'b'"},
            {"kind": "unquoted", "start": 5, "end": 7, "text": " c"},
        ])
    );
}

#[test]
fn spans_marks_unterminated_quote() {
    let value = stdout_json(quotescan().args(["spans", "--format", "json", "a 'b"]));
    assert_eq!(value[1]["kind"], "unterminated_quote");
    assert_eq!(value[1]["text"], "'b");
}

#[test]
fn config_file_sets_quote_set() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scan.yaml");
    fs::write(&path, "quote_chars: [\"`\"]\n").unwrap();

    quotescan()
        .args(["--config", path.to_str().unwrap(), "contains", "or", "`a or b`"])
        .assert()
        .code(1);
    quotescan()
        .args(["--config", path.to_str().unwrap(), "contains", "or", "'a or b'"])
        .assert()
        .code(0);
}

#[test]
fn quote_flag_overrides_config() {
    quotescan()
        .args(["contains", "--quote", "\"", "or", "\"a or b\""])
        .assert()
        .code(1);
}

#[test]
fn invalid_config_file_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scan.yaml");
    fs::write(&path, "quote_chars: [\"'\"]\nunknown_key: true\n").unwrap();

    quotescan()
        .args(["--config", path.to_str().unwrap(), "contains", "or", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid scan config"));
}

#[test]
fn backtick_rewrites_doubled_quotes() {
    quotescan()
        .args(["backtick", "'it''s'"])
        .assert()
        .success()
        .stdout("'it`s'\n");
}

#[test]
fn version_prints_package_version() {
    quotescan()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}
