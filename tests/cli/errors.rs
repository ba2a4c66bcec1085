use crate::cli::support::{roads, wayfind, write_dataset};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_dataset_exits_with_data_error() {
    let dir = tempdir().unwrap();

    wayfind()
        .arg("--dataset")
        .arg(dir.path().join("missing.toml"))
        .arg("graph")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error: dataset not found"));
}

#[test]
fn test_missing_dataset_json_envelope() {
    let dir = tempdir().unwrap();

    let output = wayfind()
        .arg("--dataset")
        .arg(dir.path().join("missing.toml"))
        .args(["--format", "json", "graph"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "dataset_not_found");
}

#[test]
fn test_negative_cost_is_rejected() {
    let (_dir, path) = write_dataset(
        "[[weighted_edges]]\nfrom = \"A\"\nto = \"B\"\ncost = -1\n",
    );

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["ucs", "--from", "A", "--to", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid cost"));
}

#[test]
fn test_malformed_dataset() {
    let (_dir, path) = write_dataset("[[edges]\nfrom =");

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .arg("graph")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid dataset"));
}

#[test]
fn test_missing_endpoint_without_defaults() {
    let (_dir, path) = write_dataset("[[edges]]\nfrom = \"A\"\nto = \"B\"\n");

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["ucs", "--from", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing --to"));
}

#[test]
fn test_multi_without_goals() {
    let (_dir, path) = write_dataset("[[edges]]\nfrom = \"A\"\nto = \"B\"\n");

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["multi", "--from", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing --goal"));
}

#[test]
fn test_unknown_strategy() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["search", "--strategy", "greedy"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported strategy"));
}

#[test]
fn test_unknown_strategy_json_envelope() {
    let output = wayfind()
        .args(["--format", "json", "search", "--strategy", "greedy"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format() {
    wayfind()
        .args(["--format", "yaml", "graph"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    wayfind()
        .arg("--dataset")
        .arg(dir.path().join("missing.toml"))
        .args(["--quiet", "graph"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
