//! Integration tests for the workout binary.
//!
//! These tests verify end-to-end behavior including:
//! - Rendering single exercises
//! - Emitting script lines and summarizing scripts
//! - Rejecting scripts with non-exercise entries
//! - Configuration defaults

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI with an isolated (missing) config file
fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workout"));
    cmd.arg("--config").arg(dir.join("config.toml"));
    cmd
}

fn write_script(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("workout.jsonl");
    fs::write(&path, contents).expect("Failed to write script");
    path
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Personal workout logging and summaries",
        ));
}

#[test]
fn test_cardio_render() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["cardio", "--name", "Running", "--distance", "3.5", "--duration", "30"])
        .assert()
        .success()
        .stdout("Running (3.5 miles, 30.0 min): 350.0 calories\n");
}

#[test]
fn test_strength_render() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args([
            "strength",
            "--name",
            "Bench Press",
            "--weight",
            "100",
            "--reps",
            "10",
            "--sets",
            "3",
        ])
        .assert()
        .success()
        .stdout("Bench Press (100.0 lbs, 10 reps x 3 sets): 150.0 calories\n");
}

#[test]
fn test_flexibility_render_and_default_intensity() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["flexibility", "--name", "Yoga", "--duration", "20", "--intensity", "High"])
        .assert()
        .success()
        .stdout("Yoga (20.0 min, high intensity): 100.0 calories\n");

    cli(temp_dir.path())
        .args(["flexibility", "--name", "Stretch", "--duration", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("medium intensity): 37.5 calories"));
}

#[test]
fn test_configured_default_intensity() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[defaults]\nintensity = \"low\"\n",
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["flexibility", "--name", "Stretch", "--duration", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low intensity): 25.0 calories"));
}

#[test]
fn test_json_entry_has_type_and_date() {
    let temp_dir = setup_test_dir();
    let output = cli(temp_dir.path())
        .args([
            "cardio",
            "--name",
            "Running",
            "--distance",
            "5",
            "--duration",
            "30",
            "--date",
            "2024-01-15",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("Entry should be valid JSON");
    assert_eq!(value["type"], "cardio");
    assert_eq!(value["name"], "Running");
    assert_eq!(value["date"], "2024-01-15");
}

#[test]
fn test_invalid_date_is_rejected() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .args(["cardio", "--name", "Run", "--distance", "1", "--duration", "8"])
        .args(["--date", "15/01/2024"])
        .assert()
        .failure();
}

#[test]
fn test_summary_of_script() {
    let temp_dir = setup_test_dir();
    let script = write_script(
        temp_dir.path(),
        r#"{"type": "cardio", "name": "Running", "distance": 3.5, "duration": 30}
{"type": "strength", "name": "Bench Press", "weight": 100, "reps": 10, "sets": 3}
{"type": "flexibility", "name": "Yoga", "duration": 20, "intensity": "high"}
"#,
    );

    let expected = "\
=== Workout Summary ===
1. Running (3.5 miles, 30.0 min): 350.0 calories
2. Bench Press (100.0 lbs, 10 reps x 3 sets): 150.0 calories
3. Yoga (20.0 min, high intensity): 100.0 calories
----------------------------------------
Total: 600.0 calories, 50 minutes
";

    cli(temp_dir.path())
        .arg("summary")
        .arg(&script)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_summary_totals_json() {
    let temp_dir = setup_test_dir();
    let script = write_script(
        temp_dir.path(),
        r#"{"type": "cardio", "name": "Running", "distance": 2, "duration": 20}
{"type": "cardio", "name": "Cycling", "distance": 4, "duration": 15.5}
"#,
    );

    let output = cli(temp_dir.path())
        .arg("summary")
        .arg(&script)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let totals: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(totals["count"], 2);
    assert_eq!(totals["total_calories"], 600.0);
    assert_eq!(totals["total_duration"], 35.5);
}

#[test]
fn test_empty_script_summary() {
    let temp_dir = setup_test_dir();
    let script = write_script(temp_dir.path(), "\n\n");

    cli(temp_dir.path())
        .arg("summary")
        .arg(&script)
        .assert()
        .success()
        .stdout("Empty workout - no exercises added.\n");
}

#[test]
fn test_emitted_entries_feed_summary() {
    let temp_dir = setup_test_dir();
    let mut script = String::new();

    for args in [
        vec!["cardio", "--name", "Running", "--distance", "1", "--duration", "10"],
        vec!["strength", "--name", "Squat", "--weight", "200", "--reps", "5", "--sets", "5"],
    ] {
        let output = cli(temp_dir.path())
            .args(&args)
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        script.push_str(&String::from_utf8_lossy(&output));
    }
    let path = write_script(temp_dir.path(), &script);

    cli(temp_dir.path())
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 350.0 calories, 10 minutes",
        ));
}

#[test]
fn test_non_exercise_entry_fails() {
    let temp_dir = setup_test_dir();
    let script = write_script(
        temp_dir.path(),
        r#"{"type": "cardio", "name": "Running", "distance": 1, "duration": 10}
{"type": "meal", "name": "Breakfast", "calories": 400}
"#,
    );

    cli(temp_dir.path())
        .arg("summary")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TypeMismatch"));
}

#[test]
fn test_missing_script_fails() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("summary")
        .arg(temp_dir.path().join("nonexistent.jsonl"))
        .assert()
        .failure();
}

#[test]
fn test_config_write_and_show() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");

    cli(temp_dir.path())
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config"));
    assert!(config_path.exists());

    cli(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("intensity = \"medium\""));
}
