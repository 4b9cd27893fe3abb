//! Command-line behavior tests
//!
//! Drives the `issue-dedup` binary end to end: input on stdin or from a file,
//! output formats, and the failure modes that must produce no output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn issue_dedup() -> Command {
    Command::cargo_bin("issue-dedup").expect("binary should build")
}

#[test]
fn test_identical_issues_flag_later_one() {
    issue_dedup()
        .arg("detect")
        .write_stdin(
            r#"[
                {"number": 1, "title": "Pump broken", "body": "leaks oil"},
                {"number": 2, "title": "Pump broken", "body": "leaks oil"}
            ]"#,
        )
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_case_and_punctuation_differences() {
    issue_dedup()
        .arg("detect")
        .write_stdin(
            r#"[
                {"number": 1, "title": "Pump is broken"},
                {"number": 2, "title": "pump is broken!!"}
            ]"#,
        )
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_empty_list_prints_nothing() {
    issue_dedup()
        .arg("detect")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_output_sorted_ascending() {
    issue_dedup()
        .arg("detect")
        .write_stdin(
            r#"[
                {"number": 50, "title": "Login fails", "body": "sso error"},
                {"number": 40, "title": "Login fails", "body": "different"},
                {"number": 7, "title": "login fails!", "body": "again"},
                {"number": 99, "title": "Printer offline", "body": "floor two"}
            ]"#,
        )
        .assert()
        .success()
        .stdout("7\n40\n");
}

#[test]
fn test_stdin_dash_argument() {
    issue_dedup()
        .args(["detect", "-"])
        .write_stdin(r#"[{"number": 3, "title": "a"}, {"number": 4, "title": "a"}]"#)
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_reads_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"number": 10, "title": "Disk full", "body": "server a"}},
            {{"number": 11, "title": "disk full", "body": "server b"}}]"#
    )
    .expect("write temp file");

    issue_dedup()
        .arg("detect")
        .arg(file.path())
        .assert()
        .success()
        .stdout("11\n");
}

#[test]
fn test_missing_file_fails() {
    issue_dedup()
        .args(["detect", "/nonexistent/issues.json"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_malformed_input_fails_without_output() {
    issue_dedup()
        .arg("detect")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Invalid input format"));
}

#[test]
fn test_non_array_input_fails() {
    issue_dedup()
        .arg("detect")
        .write_stdin(r#"{"number": 1}"#)
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_missing_number_fails_without_output() {
    issue_dedup()
        .arg("detect")
        .write_stdin(
            r#"[
                {"number": 1, "title": "x"},
                {"number": 2, "title": "x"},
                {"title": "no number"}
            ]"#,
        )
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("number"));
}

#[test]
fn test_non_string_text_is_not_an_error() {
    issue_dedup()
        .arg("detect")
        .write_stdin(
            r#"[
                {"number": 1, "title": 42, "body": "first"},
                {"number": 2, "title": null, "body": "second"}
            ]"#,
        )
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_ignore_empty_fields_flag() {
    let input = r#"[{"number": 1, "title": "alpha"}, {"number": 2, "title": "omega"}]"#;

    issue_dedup()
        .arg("detect")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2\n");

    issue_dedup()
        .args(["detect", "--ignore-empty-fields"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_title_threshold_flag() {
    let input = r#"[
        {"number": 1, "title": "pump is broken", "body": "one"},
        {"number": 2, "title": "pump was broken", "body": "two"}
    ]"#;

    issue_dedup()
        .arg("detect")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2\n");

    issue_dedup()
        .args(["detect", "--title-threshold", "0.95"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_invalid_threshold_rejected() {
    issue_dedup()
        .args(["detect", "--body-threshold", "1.5"])
        .write_stdin("[]")
        .assert()
        .failure();
}

#[test]
fn test_max_issues_bound() {
    issue_dedup()
        .args(["detect", "--max-issues", "1"])
        .write_stdin(r#"[{"number": 1}, {"number": 2}]"#)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Too many issues"));
}

#[test]
fn test_json_format() {
    let output = issue_dedup()
        .args(["detect", "--format", "json"])
        .write_stdin(
            r#"[
                {"number": 1, "title": "Pump broken", "body": "leaks oil"},
                {"number": 2, "title": "Pump broken", "body": "something else"}
            ]"#,
        )
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["duplicate_numbers"], serde_json::json!([2]));
    assert_eq!(value["duplicates"][0]["matches"][0]["field"], "title");
}

#[test]
fn test_tsv_format() {
    issue_dedup()
        .args(["detect", "--format", "tsv"])
        .write_stdin(r#"[{"number": 1, "title": "a", "body": "x"}, {"number": 2, "title": "a", "body": "y"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "duplicate\toriginal\tfield\tkind\tscore\n2\t1\ttitle\texact\t1.0000\n",
        ));
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    issue_dedup()
        .args(["detect", "--verbose"])
        .write_stdin(r#"[{"number": 1, "title": "a"}, {"number": 2, "title": "a"}]"#)
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("Read 2 issues"));
}

#[test]
fn test_compare_reports_duplicate() {
    issue_dedup()
        .args(["compare", "1", "2"])
        .write_stdin(
            r#"[
                {"number": 1, "title": "Pump is broken", "body": "oil"},
                {"number": 2, "title": "pump is broken", "body": "water"}
            ]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue 2 is a duplicate of issue 1"))
        .stdout(predicate::str::contains("exact title match"));
}

#[test]
fn test_compare_flags_whichever_issue_comes_later() {
    let input = r#"[
        {"number": 2, "title": "database timeout", "body": "on load"},
        {"number": 1, "title": "Database timeout", "body": "on save"}
    ]"#;

    issue_dedup()
        .arg("detect")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("1\n");

    for (a, b) in [("1", "2"), ("2", "1")] {
        issue_dedup()
            .args(["compare", a, b])
            .write_stdin(input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Issue 1 is a duplicate of issue 2"))
            .stdout(predicate::str::contains("Issue 2 is a duplicate").not());
    }
}

#[test]
fn test_compare_negative_issue_numbers() {
    issue_dedup()
        .args(["compare", "-4", "-3"])
        .write_stdin(
            r#"[
                {"number": -4, "title": "Pump broken"},
                {"number": -3, "title": "pump broken"}
            ]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue -3 is a duplicate of issue -4"));
}

#[test]
fn test_detect_runs_without_subcommand() {
    issue_dedup()
        .write_stdin(r#"[{"number": 3, "title": "a"}, {"number": 4, "title": "a"}]"#)
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_compare_json() {
    let output = issue_dedup()
        .args(["compare", "1", "2", "--format", "json"])
        .write_stdin(
            r#"[
                {"number": 1, "title": "alpha", "body": "first body"},
                {"number": 2, "title": "omega", "body": "other text"}
            ]"#,
        )
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["is_duplicate"], false);
    assert_eq!(value["earlier"]["title"], "alpha");
}

#[test]
fn test_compare_unknown_issue_fails() {
    issue_dedup()
        .args(["compare", "1", "9"])
        .write_stdin(r#"[{"number": 1, "title": "a"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Issue 9 not found"));
}
