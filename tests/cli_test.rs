// Binary-level tests: argument handling, exit status, generated samples.

mod common;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{run_row, ResultsTree};

#[test]
fn test_reports_disagreements_on_stdout() {
    let tree = ResultsTree::new("2024-01-01");
    tree.standard_batch(
        "data-0",
        &[
            &run_row(1, 2, 3, 3, "F", "F", 1500),
            &run_row(1, 1, 2, 2, "T", "T", 1500),
            &run_row(0, 1, 2, 2, "F", "F", 1500),
        ],
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cit-check");
    cmd.arg(tree.root());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("data count: 3"))
        .stdout(predicate::str::contains("Inciident"))
        .stdout(predicate::str::contains("M2"))
        .stdout(predicate::str::contains("Random").not());
}

#[test]
fn test_missing_pointer_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cit-check");
    cmd.arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(".current"));
}

#[test]
fn test_default_root_is_results_dir() {
    let dir = TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cit-check");
    cmd.current_dir(dir.path());

    // No results/ below the working directory.
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("results/"));
}

#[test]
fn test_rejects_flags() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cit-check");
    cmd.arg("--bogus");
    cmd.assert().failure();
}

#[test]
fn test_generated_sample_is_readable() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("results");

    let mut generate = assert_cmd::cargo::cargo_bin_cmd!("generate-sample");
    generate.arg(&root)
        .args(["--run-name", "demo", "--batches", "3", "--runs", "40", "--seed", "7"]);
    generate.assert()
        .success()
        .stdout(predicate::str::contains("Wrote 120 run(s)"));

    assert!(root.join(".current").is_file());
    assert!(root.join("demo/data-2/runData.csv").is_file());

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cit-check");
    cmd.arg(&root);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("data count: 120"))
        .stdout(predicate::str::contains("IncorrectlyFoundLiteralsCount"));
}
