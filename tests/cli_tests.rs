//! Integration tests for the hopmap CLI
//!
//! These run the hopmap binary and check its output and exit codes.

mod common;

use common::{hopmap, write_graph, CHAIN, DISCONNECTED};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    hopmap(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hopmap"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn test_version() {
    let dir = tempdir().unwrap();
    hopmap(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hopmap"));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_chain_human() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.json", CHAIN);

    hopmap(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Graph: root=0 nodes=[[1], [0, 2], [1, 3], [2]]",
        ))
        .stdout(predicate::str::contains(
            "Distances: {0: 0, 1: 1, 2: 2, 3: 3}",
        ));
}

#[test]
fn test_run_without_command_reads_graph_json() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", DISCONNECTED);

    hopmap(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances: {0: 0, 1: 1}"));
}

#[test]
fn test_run_all_strategies_agree() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        "cycle.json",
        r#"{"root": 2, "nodes": [[1, 5], [0, 2], [1, 3], [2, 4], [3, 5], [4, 0]]}"#,
    );

    for strategy in ["queue", "layered", "channel"] {
        hopmap(dir.path())
            .args(["run", "--strategy", strategy])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Distances: {0: 2, 1: 1, 2: 0, 3: 1, 4: 2, 5: 3}",
            ));
    }
}

#[test]
fn test_run_unknown_strategy_is_usage_error() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.json", CHAIN);

    hopmap(dir.path())
        .args(["run", "--strategy", "dfs"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn test_run_json_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "graph.json", DISCONNECTED);

    let output = hopmap(dir.path())
        .args(["--format", "json", "run"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["root"], 0);
    assert_eq!(json["strategy"], "queue");
    assert_eq!(json["reachable"], 2);
    assert_eq!(json["distances"]["0"], 0);
    assert_eq!(json["distances"]["1"], 1);
    assert!(json["distances"].get("2").is_none());
    assert_eq!(json["nodes"], serde_json::json!([[1], [0], []]));
}

#[test]
fn test_run_records_output() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.json", CHAIN);

    hopmap(dir.path())
        .args(["--format", "records", "run", "-s", "layered"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H hopmap=1 root=0 nodes=4 reachable=4 strategy=layered",
        ))
        .stdout(predicate::str::contains("D 3 3"));
}

#[test]
fn test_run_missing_file_fails() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .arg("run")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open"))
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn test_run_malformed_json_fails() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "broken.json", r#"{"root": 0, "nodes": [[1],"#);

    hopmap(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_run_root_out_of_range_is_validation_error() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "graph.json", r#"{"root": 5, "nodes": [[1], [0], []]}"#);

    hopmap(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "root must point to an existing node",
        ));
}

#[test]
fn test_run_edge_out_of_range_is_validation_error() {
    let dir = tempdir().unwrap();
    let path = write_graph(
        dir.path(),
        "graph.json",
        r#"{"root": 0, "nodes": [[1], [0, 10], []]}"#,
    );

    hopmap(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edges must point to an existing node"));
}

#[test]
fn test_run_trusts_one_way_entries_by_default() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "graph.json", r#"{"root": 0, "nodes": [[1], [2], []]}"#);

    hopmap(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances: {0: 0, 1: 1, 2: 2}"));

    hopmap(dir.path())
        .args(["run", "--require-symmetric"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not symmetric"));
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "graph.json", r#"{"root": 5, "nodes": [[]]}"#);

    let output = hopmap(dir.path())
        .args(["--format", "json", "run"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "validation_error");
}

#[test]
fn test_json_error_envelope_for_bad_flags() {
    let dir = tempdir().unwrap();

    let output = hopmap(dir.path())
        .args(["--format=json", "run", "--no-such-flag"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_error_text() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .args(["--quiet", "run"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// interactive
// ============================================================================

#[test]
fn test_interactive_builds_undirected_graph() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .arg("interactive")
        .write_stdin("4\n3\n0 1\n1 2\n2 3\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Graph: root=3 nodes=[[1], [0, 2], [1, 3], [2]]",
        ))
        .stdout(predicate::str::contains(
            "Distances: {0: 3, 1: 2, 2: 1, 3: 0}",
        ))
        .stderr(predicate::str::contains("Nb nodes: "))
        .stderr(predicate::str::contains("Edge 3: "))
        .stderr(predicate::str::contains("Root node: "));
}

#[test]
fn test_interactive_channel_strategy() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .args(["interactive", "--strategy", "channel"])
        .write_stdin("3\n1\n0 1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances: {0: 0, 1: 1}"));
}

#[test]
fn test_interactive_huge_node_count_is_data_error() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .arg("interactive")
        .write_stdin("18446744073709551615\n0\n0\n")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is too large"));
}

#[test]
fn test_interactive_bad_number_is_usage_error() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .arg("interactive")
        .write_stdin("three\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid node count"));
}

#[test]
fn test_interactive_endpoint_out_of_range() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .arg("interactive")
        .write_stdin("2\n1\n0 4\n0\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edges must point to an existing node"));
}

#[test]
fn test_interactive_truncated_input() {
    let dir = tempdir().unwrap();

    hopmap(dir.path())
        .arg("interactive")
        .write_stdin("2\n1\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected end of input"));
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_success() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.json", CHAIN);

    hopmap(dir.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graph is valid: 4 nodes, root 0"))
        .stdout(predicate::str::contains("Distances").not());
}

#[test]
fn test_validate_failure() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "graph.json", r#"{"root": -1, "nodes": [[]]}"#);

    hopmap(dir.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .code(3);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_sets_defaults() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "configured.json", CHAIN);
    fs::write(
        dir.path().join("config.toml"),
        format!(
            "graph_file = {:?}\nstrategy = \"channel\"\nformat = \"records\"\n",
            dir.path().join("configured.json").display().to_string()
        ),
    )
    .unwrap();

    hopmap(dir.path())
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy=channel"))
        .stdout(predicate::str::contains("D 3 3"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.json", CHAIN);
    fs::write(
        dir.path().join("config.toml"),
        "strategy = \"channel\"\nformat = \"records\"\n",
    )
    .unwrap();

    hopmap(dir.path())
        .args(["--format", "human", "run", "--strategy", "queue"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Distances: {0: 0, 1: 1, 2: 2, 3: 3}"));
}

#[test]
fn test_config_symmetry_enforced() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "graph.json", r#"{"root": 0, "nodes": [[1], []]}"#);
    let config = dir.path().join("strict.toml");
    fs::write(&config, "symmetry = \"enforce\"\n").unwrap();

    hopmap(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("run")
        .arg(&path)
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let path = write_graph(dir.path(), "chain.json", CHAIN);
    fs::write(dir.path().join("config.toml"), "strategy = 7\n").unwrap();

    hopmap(dir.path())
        .arg("run")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
