use crate::cli::support::{roads, stdout_json, wayfind};
use predicates::prelude::*;

// ============================================================================
// Uniform-cost search
// ============================================================================

#[test]
fn test_ucs_cheapest_route() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["ucs", "--from", "S", "--to", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UCS: S -> A -> B -> G"))
        .stdout(predicate::str::contains("cost: 6 (3 edges)"));
}

#[test]
fn test_ucs_resolves_aliases() {
    let (_dir, path) = roads();

    let output = wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "json", "ucs", "--from", " Start ", "--to", "Goal"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["algorithm"], "ucs");
    assert_eq!(json["from"], "S");
    assert_eq!(json["to"], "G");
    assert_eq!(json["path"], serde_json::json!(["S", "A", "B", "G"]));
    assert_eq!(json["total_cost"].as_f64(), Some(6.0));
}

#[test]
fn test_ucs_unreachable() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["ucs", "--from", "S", "--to", "Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UCS: no path from S to Y"));
}

#[test]
fn test_ucs_records() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "records", "ucs", "--from", "S", "--to", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=ucs from=S to=G found=true cost=6 length=3",
        ))
        .stdout(predicate::str::contains("N 3 G"));
}

// ============================================================================
// A* search
// ============================================================================

#[test]
fn test_astar_matches_ucs_with_admissible_heuristics() {
    let (_dir, path) = roads();

    let output = wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "json", "astar", "--from", "S", "--to", "G"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["path"], serde_json::json!(["S", "A", "B", "G"]));
    assert_eq!(json["total_cost"].as_f64(), Some(6.0));
    assert_eq!(json["start_heuristic"].as_f64(), Some(6.0));
}

#[test]
fn test_astar_human() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["astar", "--from", "S", "--to", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A*: S -> A -> B -> G"));
}

// ============================================================================
// Greedy multi-goal search
// ============================================================================

#[test]
fn test_multi_default_goals() {
    let (_dir, path) = roads();

    let output = wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "json", "multi", "--from", "S"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    // C and B are both 3 away from S; C is listed first
    assert_eq!(json["visit_order"], serde_json::json!(["C", "B"]));
    assert_eq!(
        json["complete_path"],
        serde_json::json!(["S", "A", "C", "A", "B"])
    );
    assert_eq!(json["total_cost"].as_f64(), Some(7.0));
    assert_eq!(json["success"], true);
}

#[test]
fn test_multi_partial_failure() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["multi", "--from", "S", "--goal", "Y", "--goal", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reached 1 of 2 goals from S"))
        .stdout(predicate::str::contains("Visit order: B"))
        .stdout(predicate::str::contains("Route: S -> A -> B"))
        .stdout(predicate::str::contains("cost: 3"));
}

#[test]
fn test_multi_records() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "records", "multi", "--from", "S", "--goal", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=multi from=S goals=1 visited=1 found=true cost=6",
        ))
        .stdout(predicate::str::contains("G 0 G"));
}

// ============================================================================
// Builtin dataset
// ============================================================================

#[test]
fn test_builtin_dataset_defaults() {
    wayfind()
        .arg("ucs")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "UCS: Addis Ababa -> Adama -> Batu -> Shashemene -> Hawassa -> Dilla -> Bule Hora -> Yabello -> Moyale",
        ))
        .stdout(predicate::str::contains("cost: 27"));
}

#[test]
fn test_builtin_dataset_aliases() {
    wayfind()
        .args(["astar", "--from", "Addis", "--to", "Moyale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A*: Addis Ababa -> Adama"))
        .stdout(predicate::str::contains("cost: 27"));
}
