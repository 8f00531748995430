//! CLI tests for the tw binary
//!
//! Only offline commands are exercised here; search hits the network and is
//! covered by the library integration tests through a scripted client.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let config_path = dir.path().join("tripweaver.yml");
    let data_dir = dir.path().join("data");
    std::fs::write(
        &config_path,
        format!("storage:\n  data-dir: {}\n", data_dir.display()),
    )
    .unwrap();
    config_path
}

#[test]
fn test_help() {
    Command::cargo_bin("tw")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("fav"));
}

#[test]
fn test_fav_add_list_remove_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    let record_path = dir.path().join("record.json");
    std::fs::write(
        &record_path,
        r#"{"id": "cli-1", "title": "Lisbon Classics", "level": "cultural", "program": ["Day 1: Alfama"]}"#,
    )
    .unwrap();

    Command::cargo_bin("tw")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "fav", "add"])
        .arg(&record_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon Classics"));

    Command::cargo_bin("tw")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon Classics"))
        .stdout(predicate::str::contains("#cultural"));

    Command::cargo_bin("tw")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "fav", "remove", "cli-1"])
        .assert()
        .success();

    Command::cargo_bin("tw")
        .unwrap()
        .args(["--config", config.to_str().unwrap(), "fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn test_search_rejects_non_numeric_duration() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    Command::cargo_bin("tw")
        .unwrap()
        .env("GEMINI_API_KEY", "test-key")
        .args(["--config", config.to_str().unwrap(), "search", "Lisbon", "--days", "12a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("whole number"));
}
