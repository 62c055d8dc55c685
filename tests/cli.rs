//! End-to-end CLI tests: each invocation is a separate process, so these
//! also exercise hydration from disk between commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn hrtrack(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hrtrack").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

fn add_employee(dir: &Path, first: &str, last: &str) -> String {
    let assert = hrtrack(dir)
        .args([
            "employee",
            "add",
            "--first-name",
            first,
            "--last-name",
            last,
            "--email",
            "jane@example.com",
            "--phone",
            "555-0100",
            "--position",
            "SWE",
            "--department",
            "Eng",
        ])
        .assert()
        .success();

    // "Employee added (<id>): First Last"
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    stdout
        .split('(')
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .expect("id in add output")
        .to_string()
}

#[test]
fn empty_store_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    hrtrack(dir.path())
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."));
}

#[test]
fn add_list_and_search_employees() {
    let dir = tempfile::tempdir().unwrap();
    add_employee(dir.path(), "Jane", "Doe");
    add_employee(dir.path(), "John", "Smith");

    hrtrack(dir.path())
        .args(["employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe").and(predicate::str::contains("John Smith")));

    hrtrack(dir.path())
        .args(["employee", "list", "--search", "smith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John Smith").and(predicate::str::contains("Jane Doe").not()));
}

#[test]
fn delete_cascades_to_reviews() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_employee(dir.path(), "Jane", "Doe");

    hrtrack(dir.path())
        .args(["review", "add", "--employee", &id, "--rating", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annual review recorded for Jane Doe (5/5)"));

    hrtrack(dir.path())
        .args(["employee", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee deleted"));

    hrtrack(dir.path())
        .args(["review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reviews found."));
}

#[test]
fn document_upload_and_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_employee(dir.path(), "Jane", "Doe");

    let source = dir.path().join("handbook.txt");
    std::fs::write(&source, "employee handbook").unwrap();

    let assert = hrtrack(dir.path())
        .args([
            "doc",
            "upload",
            source.to_str().unwrap(),
            "--employee",
            &id,
            "--category",
            "personal",
            "--description",
            "The handbook",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("handbook.txt for Jane Doe"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc_id = stdout
        .split('(')
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .expect("document id in upload output")
        .to_string();

    hrtrack(dir.path())
        .args(["doc", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("handbook.txt").and(predicate::str::contains("Personal")));

    let restored = dir.path().join("restored.txt");
    hrtrack(dir.path())
        .args(["doc", "save", &doc_id, "--out", restored.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(
        std::fs::read_to_string(restored).unwrap(),
        "employee handbook"
    );
}

#[test]
fn incident_report_appears_in_listing() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_employee(dir.path(), "Jane", "Doe");

    hrtrack(dir.path())
        .args([
            "incident",
            "report",
            "--employee",
            &id,
            "--type",
            "safety",
            "--severity",
            "high",
            "--description",
            "Ladder left unsecured",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Safety incident reported for Jane Doe"));

    hrtrack(dir.path())
        .args(["incident", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ladder left unsecured")
                .and(predicate::str::contains("High")),
        );
}

#[test]
fn dashboard_counts_records() {
    let dir = tempfile::tempdir().unwrap();
    let id = add_employee(dir.path(), "Jane", "Doe");
    hrtrack(dir.path())
        .args(["review", "add", "--employee", &id])
        .assert()
        .success();

    hrtrack(dir.path())
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 total, 1 active").and(predicate::str::contains("Reviews")));
}

#[test]
fn config_reviewer_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    hrtrack(dir.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reviewer = HR Manager"));

    hrtrack(dir.path())
        .args(["config", "reviewer", "Pat Lee"])
        .assert()
        .success();

    hrtrack(dir.path())
        .args(["config", "reviewer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reviewer = Pat Lee"));
}
