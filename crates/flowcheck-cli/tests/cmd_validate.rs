//! Integration tests for `flowcheck validate`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

fn validate(args: &[&str], name: &str) -> Output {
    let path = fixture(name);
    Command::new(env!("CARGO_BIN_EXE_flowcheck"))
        .arg("validate")
        .args(args)
        .arg("--no-color")
        .arg(path.to_str().expect("path"))
        .output()
        .expect("run flowcheck validate")
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[test]
fn acyclic_exits_0_without_stdout() {
    let out = validate(&[], "acyclic.json");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
    assert!(out.stdout.is_empty());
    assert!(stderr_of(&out).contains("0 errors, 0 warnings"));
}

#[test]
fn cyclic_exits_1_with_grf01() {
    let out = validate(&[], "cyclic.json");
    assert_eq!(out.status.code(), Some(1));
    let stderr = stderr_of(&out);
    assert!(stderr.contains("[E] GRF-01"), "stderr: {stderr}");
    assert!(stderr.contains("1 error, 0 warnings"), "stderr: {stderr}");
    assert!(
        !stderr.contains("error: validation failed"),
        "the summary line replaces the error message"
    );
}

#[test]
fn self_loop_exits_1() {
    assert_eq!(validate(&[], "self-loop.json").status.code(), Some(1));
}

#[test]
fn dangling_edge_exits_1_with_edg03() {
    let out = validate(&[], "dangling.json");
    assert_eq!(out.status.code(), Some(1));
    let stderr = stderr_of(&out);
    assert!(stderr.contains("EDG-03"), "stderr: {stderr}");
    assert!(!stderr.contains("GRF-01"), "dangling edges do not form a cycle");
}

#[test]
fn malformed_entries_report_every_problem() {
    let out = validate(&["--format", "json"], "malformed-entries.json");
    assert_eq!(out.status.code(), Some(1));
    let stderr = stderr_of(&out);
    let lines: Vec<serde_json::Value> = stderr
        .lines()
        .map(|l| serde_json::from_str(l).expect("each stderr line is JSON"))
        .collect();
    let summary = lines.last().expect("summary line");
    assert_eq!(summary["summary"]["errors"], 9);
    assert_eq!(summary["summary"]["warnings"], 2);
    assert_eq!(lines.len(), 12);
}

#[test]
fn skip_graph_accepts_a_cycle() {
    let out = validate(&["--skip-graph"], "cyclic.json");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
}

#[test]
fn skip_schema_hides_dangling_edges() {
    let out = validate(&["--skip-schema"], "dangling.json");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
}

#[test]
fn quiet_suppresses_warnings_and_summary() {
    let out = validate(&["--quiet", "--skip-schema"], "malformed-entries.json");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty(), "stderr: {}", stderr_of(&out));
}

#[test]
fn verbose_adds_timing() {
    let out = validate(&["--verbose"], "acyclic.json");
    assert_eq!(out.status.code(), Some(0));
    assert!(stderr_of(&out).contains("validated in "));
}

// ---------------------------------------------------------------------------
// Input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn not_an_object_exits_2() {
    let out = validate(&[], "not-an-object.json");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("error: not a pipeline document"));
}

#[test]
fn invalid_syntax_exits_2_with_position() {
    let out = validate(&[], "invalid-syntax.json");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("line 3"), "stderr: {}", stderr_of(&out));
}

#[test]
fn missing_file_exits_2() {
    let out = validate(&[], "does-not-exist.json");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("error: file not found"));
}

#[test]
fn file_over_size_limit_exits_2() {
    let out = validate(&["--max-file-size", "16"], "acyclic.json");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("file too large"));
}

// ---------------------------------------------------------------------------
// stdin
// ---------------------------------------------------------------------------

fn validate_stdin(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_flowcheck"))
        .args(["validate", "--no-color", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn flowcheck");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("wait for flowcheck")
}

#[test]
fn stdin_cycle_exits_1() {
    let input = br#"{"nodes":[{"id":"a","position":{"x":0,"y":0},"data":{"label":"A"}}],
                     "edges":[{"id":"e","source":"a","target":"a"}]}"#;
    assert_eq!(validate_stdin(input).status.code(), Some(1));
}

#[test]
fn stdin_invalid_utf8_exits_2() {
    let out = validate_stdin(b"{\"nodes\":[\xc3\x28]}");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("offset 10"), "stderr: {}", stderr_of(&out));
}
