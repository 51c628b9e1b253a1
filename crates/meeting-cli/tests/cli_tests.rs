//! Integration tests for the `meetfind` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the query and busy
//! subcommands through the actual binary, including stdin/stdout piping, file
//! I/O, output formats, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

/// Helper: path to the schedule.json fixture.
///
/// Carol is away all day, so the request falls back to alice and bob only.
fn schedule_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.json")
}

/// Helper: path to the team.json fixture, where carol can join.
fn team_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/team.json")
}

fn stdout_json(output: std::process::Output) -> Value {
    assert!(output.status.success(), "command should succeed");
    serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Query subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn query_falls_back_when_optional_attendee_is_away() {
    let output = Command::cargo_bin("meetfind")
        .unwrap()
        .args(["query", "-i", schedule_json_path()])
        .output()
        .unwrap();

    assert_eq!(
        stdout_json(output),
        json!({
            "slots": [
                {"start": 0, "end": 540},
                {"start": 570, "end": 600},
                {"start": 780, "end": 900},
                {"start": 960, "end": 1440}
            ],
            "attendance": "mandatory_only"
        })
    );
}

#[test]
fn query_includes_optional_attendee_when_possible() {
    let output = Command::cargo_bin("meetfind")
        .unwrap()
        .args(["query", "-i", team_json_path()])
        .output()
        .unwrap();

    assert_eq!(
        stdout_json(output),
        json!({
            "slots": [{"start": 0, "end": 480}, {"start": 600, "end": 1440}],
            "attendance": "all_attendees"
        })
    );
}

#[test]
fn query_stdin_to_stdout() {
    let input = r#"{"events": [], "request": {"duration": 30, "attendees": ["alice"]}}"#;

    Command::cargo_bin("meetfind")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""end": 1440"#))
        .stdout(predicate::str::contains("all_attendees"));
}

#[test]
fn query_text_format_renders_clock_times() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["query", "-i", schedule_json_path(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:00, 09:00)\n"))
        .stdout(predicate::str::contains("[09:30, 10:00)\n"))
        .stdout(predicate::str::contains("[16:00, 24:00)\n"))
        .stdout(predicate::str::contains("optional attendees cannot join"));
}

#[test]
fn query_text_format_prints_one_bracketed_line_per_slot() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["query", "-i", team_json_path(), "--format", "text"])
        .assert()
        .success()
        .stdout("[00:00, 08:00)\n[10:00, 24:00)\n");
}

#[test]
fn query_duration_override_drops_short_slots() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args([
            "query",
            "-i",
            schedule_json_path(),
            "--format",
            "text",
            "--duration",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[13:00, 15:00)\n"))
        .stdout(predicate::str::contains("[09:30, 10:00)").not());
}

#[test]
fn query_longer_than_a_day_is_not_an_error() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args([
            "query",
            "-i",
            schedule_json_path(),
            "--format",
            "text",
            "--duration",
            "1441",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no meeting time available"));
}

#[test]
fn query_file_to_file() {
    let output_path = "/tmp/meetfind-test-query-output.json";
    let _ = std::fs::remove_file(output_path);

    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["query", "-i", team_json_path(), "-o", output_path])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(output_path).expect("output file must exist");
    let value: Value = serde_json::from_str(&content).expect("output must be valid JSON");
    assert_eq!(value["attendance"], "all_attendees");

    let _ = std::fs::remove_file(output_path);
}

#[test]
fn query_without_request_fails() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .arg("query")
        .write_stdin(r#"{"events": []}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no \"request\""));
}

// ─────────────────────────────────────────────────────────────────────────────
// Busy subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn busy_collapses_events_of_named_attendees() {
    let output = Command::cargo_bin("meetfind")
        .unwrap()
        .args(["busy", "-i", schedule_json_path(), "-a", "alice", "-a", "bob"])
        .output()
        .unwrap();

    // Focus time and Lunch touch at 12:00, so they merge.
    assert_eq!(
        stdout_json(output),
        json!([
            {"start": 540, "end": 570},
            {"start": 600, "end": 780},
            {"start": 900, "end": 960}
        ])
    );
}

#[test]
fn busy_text_format() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args([
            "busy",
            "-i",
            schedule_json_path(),
            "--attendee",
            "alice",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[09:00, 09:30)\n"))
        .stdout(predicate::str::contains("[10:00, 12:00)\n"));
}

#[test]
fn busy_unknown_attendee_has_no_busy_intervals() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["busy", "-i", schedule_json_path(), "-a", "dave", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no busy intervals"));
}

#[test]
fn busy_requires_an_attendee() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["busy", "-i", schedule_json_path()])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_json_fails() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .arg("query")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse schedule JSON"));
}

#[test]
fn reversed_event_range_is_rejected() {
    let input = r#"{
        "events": [{"when": {"start": 660, "end": 600}, "attendees": ["alice"]}],
        "request": {"duration": 30, "attendees": ["alice"]}
    }"#;

    Command::cargo_bin("meetfind")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time range: [660, 600)"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["query", "-i", "/nonexistent/schedule.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    Command::cargo_bin("meetfind")
        .unwrap()
        .args(["-v", "query", "-i", schedule_json_path()])
        .env_remove("MEETFIND_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("falling back to mandatory attendees"))
        .stdout(predicate::str::contains("mandatory_only"));
}
