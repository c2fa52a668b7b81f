//! Integration tests for the gridbench CLI

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_score_prints_accuracy_in_unit_interval() {
    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("score")
        .arg("5")
        .arg("linear")
        .arg("1.0")
        .arg("0.1")
        .arg("--data")
        .arg(fixture_path("two_cluster.csv"));

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    // Single float, no trailing newline
    assert!(!stdout.ends_with('\n'), "unexpected trailing newline");
    let accuracy: f64 = stdout.parse().expect("stdout should be a single float");
    assert!(
        (0.0..=1.0).contains(&accuracy),
        "accuracy out of range: {accuracy}"
    );
}

#[test]
fn test_score_rejects_fold_count_below_two() {
    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("score")
        .arg("1")
        .arg("linear")
        .arg("1.0")
        .arg("0.1")
        .arg("--data")
        .arg(fixture_path("two_cluster.csv"));

    cmd.assert().failure();
}

#[test]
fn test_score_rejects_unknown_kernel() {
    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("score")
        .arg("5")
        .arg("quadratic")
        .arg("1.0")
        .arg("0.1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_score_fails_on_missing_dataset() {
    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("score")
        .arg("5")
        .arg("linear")
        .arg("1.0")
        .arg("0.1")
        .arg("--data")
        .arg("data/no-such-dataset.csv");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn test_speedup_fails_when_output_directory_is_missing() {
    // The output directory is an operator-setup precondition; the run
    // terminates rather than creating it.
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-dir").join("speedup.png");

    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("speedup")
        .arg("--program")
        .arg("true")
        .arg("--sizes")
        .arg("small:12")
        .arg("--workers")
        .arg("2")
        .arg("--quiet")
        .arg("--output")
        .arg(&missing);

    cmd.assert().failure();
    assert!(!missing.exists());
}

#[test]
fn test_speedup_rejects_blank_program_command() {
    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("speedup").arg("--program").arg("   ").arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_speedup_writes_json_report() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let json_path = temp_dir.path().join("speedup.json");
    let png_path = temp_dir.path().join("speedup.png");

    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("speedup")
        .arg("--program")
        .arg("true")
        .arg("--sizes")
        .arg("small:12,medium:24")
        .arg("--workers")
        .arg("2,4")
        .arg("--quiet")
        .arg("--json")
        .arg(&json_path)
        .arg("--output")
        .arg(&png_path);

    // The JSON report is written before chart rendering, so it exists even
    // if the rendering environment (fonts) is unavailable.
    let _ = cmd.assert();
    let content = std::fs::read_to_string(&json_path).unwrap();
    assert!(content.contains("\"curves\""));
    assert!(content.contains("\"small\""));
    assert!(content.contains("\"medium\""));
}

#[test]
fn test_help_lists_both_commands() {
    let mut cmd = Command::cargo_bin("gridbench").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("speedup"))
        .stdout(predicate::str::contains("score"));
}
