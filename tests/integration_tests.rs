use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_with_invalid_json_file() {
    let fixture = fixture_path("invalid.json");

    cargo_bin_cmd!()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options"));
}

#[test]
fn test_cli_with_missing_label() {
    let fixture = fixture_path("missing_label.json");

    cargo_bin_cmd!()
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry 1: missing field `label`"));
}

#[test]
fn test_cli_with_non_array_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("object.json");
    fs::write(&path, r#"{"label": "A", "value": 1}"#).unwrap();

    cargo_bin_cmd!()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options"))
        .stderr(predicate::str::contains("expected a sequence"));
}

#[test]
fn test_cli_with_nonexistent_file() {
    cargo_bin_cmd!()
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options"));
}

#[test]
fn test_cli_rejects_non_numeric_items() {
    cargo_bin_cmd!()
        .args(["--items", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--items"));
}

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dropdown select"))
        .stdout(predicate::str::contains("--placeholder"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dropsel"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("options.json").exists());
    assert!(fixture_path("invalid.json").exists());
    assert!(fixture_path("missing_label.json").exists());
}

#[test]
fn test_fixture_options_parse() {
    let options = dropsel::OptionList::load(&fixture_path("options.json")).unwrap();

    assert_eq!(options.len(), 4);
    assert_eq!(options[0].label, "Apple");
    assert_eq!(options[3].label, "42");
}
