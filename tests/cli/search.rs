use crate::cli::support::{roads, stdout_json, wayfind};
use predicates::prelude::*;

// ============================================================================
// Uninformed search
// ============================================================================

#[test]
fn test_search_runs_both_strategies_by_default() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["search", "--from", "A", "--to", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: A -> C -> E"))
        .stdout(predicate::str::contains("cost: 2 (2 edges)"))
        .stdout(predicate::str::contains("DFS: A -> B -> D -> C -> E"))
        .stdout(predicate::str::contains("cost: 4 (4 edges)"));
}

#[test]
fn test_search_uses_dataset_defaults() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["search", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: A -> C -> E"))
        .stdout(predicate::str::contains("DFS").not());
}

#[test]
fn test_search_dataset_from_environment() {
    let (_dir, path) = roads();

    wayfind()
        .env("WAYFIND_DATASET", &path)
        .args(["search", "--strategy", "dfs", "--from", "A", "--to", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS: A -> B -> D"));
}

#[test]
fn test_search_json() {
    let (_dir, path) = roads();

    let output = wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "json", "search", "--from", "A", "--to", "E"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "E");
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["algorithm"], "bfs");
    assert_eq!(results[0]["path"], serde_json::json!(["A", "C", "E"]));
    assert_eq!(results[0]["path_length"], 2);
    assert_eq!(results[1]["algorithm"], "dfs");
    assert_eq!(results[1]["total_cost"].as_f64(), Some(4.0));
    assert_eq!(results[1]["success"], true);
}

#[test]
fn test_search_records() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "records", "search", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H wayfind=1 records=1"))
        .stdout(predicate::str::contains(
            "mode=search.bfs from=A to=E found=true cost=2 length=2",
        ))
        .stdout(predicate::str::contains("N 0 A\nN 1 C\nN 2 E\n"));
}

#[test]
fn test_search_unknown_node_is_not_an_error() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["search", "--from", "A", "--to", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: no path from A to Atlantis"))
        .stdout(predicate::str::contains("DFS: no path from A to Atlantis"));
}

#[test]
fn test_search_unreachable() {
    let (_dir, path) = roads();

    let output = wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "json", "search", "--from", "A", "--to", "Y"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    for result in json["results"].as_array().unwrap() {
        assert_eq!(result["success"], false);
        assert_eq!(result["path"], serde_json::json!([]));
    }
}

#[test]
fn test_search_start_equals_goal() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["search", "--strategy", "bfs", "--from", "D", "--to", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: D\n"))
        .stdout(predicate::str::contains("cost: 0 (0 edges)"));
}

#[test]
fn test_quiet_hides_cost_line() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--quiet", "search", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: A -> C -> E"))
        .stdout(predicate::str::contains("cost:").not());
}
