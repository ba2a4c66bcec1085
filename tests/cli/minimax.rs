use crate::cli::support::{roads, stdout_json, wayfind, write_dataset};
use predicates::prelude::*;

#[test]
fn test_minimax_value_and_path() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .arg("minimax")
        .assert()
        .success()
        .stdout(predicate::str::contains("Best value: 3"))
        .stdout(predicate::str::contains("Best path: root -> left -> a"))
        .stdout(predicate::str::contains("nodes evaluated: 7"))
        .stdout(predicate::str::contains("Decision tree:").not());
}

#[test]
fn test_minimax_trace() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["minimax", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decision tree:"))
        .stdout(predicate::str::contains("├── root [MAX]"))
        .stdout(predicate::str::contains("        └── a [utility: 3]"))
        .stdout(predicate::str::contains("MAX: root"))
        .stdout(predicate::str::contains("   -> MIN chooses 3 (path to a)"))
        .stdout(predicate::str::contains("   -> MAX chooses 3 (path to a)"));
}

#[test]
fn test_minimax_json() {
    let (_dir, path) = roads();

    let output = wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "json", "minimax"])
        .output()
        .unwrap();
    let json = stdout_json(&output);

    assert_eq!(json["best_value"], 3);
    assert_eq!(json["best_path"], serde_json::json!(["root", "left", "a"]));
    assert_eq!(json["nodes_evaluated"], 7);
    assert!(json.get("trace").is_none());
    assert!(json.get("decision_tree").is_none());
}

#[test]
fn test_minimax_records_with_trace() {
    let (_dir, path) = roads();

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .args(["--format", "records", "minimax", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=minimax value=3 nodes=7 length=2"))
        .stdout(predicate::str::contains("N 2 a"))
        .stdout(predicate::str::contains("T \"MAX: root\""));
}

#[test]
fn test_minimax_builtin_route_game() {
    wayfind()
        .arg("minimax")
        .assert()
        .success()
        .stdout(predicate::str::contains("Best value: 8"))
        .stdout(predicate::str::contains(
            "Best path: Addis Ababa -> Gedo -> Gimbi-Limu -> Gimbi",
        ))
        .stdout(predicate::str::contains("nodes evaluated: 23"));
}

#[test]
fn test_minimax_without_game_tree() {
    let (_dir, path) = write_dataset("[[edges]]\nfrom = \"A\"\nto = \"B\"\n");

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .arg("minimax")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("game tree not found"));
}

#[test]
fn test_minimax_childless_decision_node() {
    let (_dir, path) = write_dataset(
        r#"
[[game]]
name = "root"

[[game]]
name = "leaf"
parent = "root"
utility = 1

[[game]]
name = "empty"
parent = "root"
player = "min"
"#,
    );

    wayfind()
        .arg("--dataset")
        .arg(&path)
        .arg("minimax")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty"));
}
