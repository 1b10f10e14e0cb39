//! Integration tests for the waymark CLI
//!
//! These tests run the waymark binary and verify exit codes and output.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get a Command for waymark
fn waymark() -> Command {
    cargo_bin_cmd!("waymark")
}

/// The six-vertex example graph: cheapest A-E route is A-C-D-F-E at 6.
const SAMPLE_GRAPH: &str = r#"{
  "vertices": ["A", "B", "C", "D", "E", "F"],
  "edges": [
    { "a": "A", "b": "B", "weight": 4 },
    { "a": "A", "b": "C", "weight": 2 },
    { "a": "B", "b": "E", "weight": 3 },
    { "a": "C", "b": "D", "weight": 2 },
    { "a": "C", "b": "F", "weight": 4 },
    { "a": "D", "b": "E", "weight": 3 },
    { "a": "D", "b": "F", "weight": 1 },
    { "a": "E", "b": "F", "weight": 1 }
  ]
}"#;

fn write_graph(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("graph.json");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// Help and version tests
// ============================================================================

#[test]
fn test_help_flag() {
    waymark()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waymark"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_version_flag() {
    waymark()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waymark"));
}

#[test]
fn test_subcommand_help() {
    waymark()
        .args(["route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Find the cheapest route between two vertices",
        ));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    waymark()
        .args(["--format", "invalid", "info"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    waymark()
        .args(["--format", "json", "info", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_unknown_command_exit_code_2() {
    waymark().arg("nonexistent").assert().code(2);
}

#[test]
fn test_no_command_is_usage_error() {
    waymark()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no command given"));
}

#[test]
fn test_missing_graph_flag_exit_code_2() {
    waymark()
        .env_remove("WAYMARK_GRAPH")
        .args(["route", "A", "E"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    waymark()
        .arg("--graph")
        .arg(dir.path().join("absent.json"))
        .args(["route", "A", "E"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_malformed_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "{ not json");

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["route", "A", "E"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid graph file"));
}

#[test]
fn test_unknown_vertex_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["route", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: Z"));
}

#[test]
fn test_unknown_vertex_json_error_envelope() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "route", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_vertex\""));
}

#[test]
fn test_no_path_exit_code_1() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        r#"{
            "vertices": ["A", "B", "X"],
            "edges": [ { "a": "A", "b": "B", "weight": 1 } ]
        }"#,
    );

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["route", "A", "X"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no path from A to X"));
}

// ============================================================================
// Route command tests
// ============================================================================

#[test]
fn test_route_human_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["route", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> D -> F -> E"))
        .stdout(predicate::str::contains("total weight: 6"))
        .stdout(predicate::str::contains("hops: 4"));
}

#[test]
fn test_route_quiet_prints_path_only() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["--quiet", "route", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> D -> F -> E"))
        .stdout(predicate::str::contains("total weight").not());
}

#[test]
fn test_route_json_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    let output = waymark()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "route", "A", "E"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let route: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(route["from"], "A");
    assert_eq!(route["to"], "E");
    assert_eq!(
        route["path"],
        serde_json::json!(["A", "C", "D", "F", "E"])
    );
    assert_eq!(route["total_weight"], 6.0);
    assert_eq!(route["hops"], 4);
}

#[test]
fn test_route_source_equals_destination() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .arg("--graph")
        .arg(&path)
        .args(["route", "A", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total weight: 0"))
        .stdout(predicate::str::contains("hops: 0"));
}

#[test]
fn test_route_graph_from_env_var() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .env("WAYMARK_GRAPH", &path)
        .args(["route", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C"))
        .stdout(predicate::str::contains("total weight: 2"));
}

// ============================================================================
// Info command tests
// ============================================================================

#[test]
fn test_info_human_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    waymark()
        .arg("--graph")
        .arg(&path)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("vertices: 6"))
        .stdout(predicate::str::contains("edges: 8"));
}

#[test]
fn test_info_json_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), SAMPLE_GRAPH);

    let output = waymark()
        .arg("--graph")
        .arg(&path)
        .args(["--format", "json", "info"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let info: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(info["vertices"], 6);
    assert_eq!(info["edges"], 8);
}
